pub mod fps_tracker;
pub mod greet_loop_use_case;
pub mod run_stats;
