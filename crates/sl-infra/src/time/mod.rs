mod teardown_timer;

pub use teardown_timer::TeardownTimer;
