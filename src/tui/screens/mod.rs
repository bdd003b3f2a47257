pub mod pomodoro;
