//! Integration tests for metalgpu.

mod util;


#[cfg(not(target_os = "macos"))]
mod no_gpu_tests;
