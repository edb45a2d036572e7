#[cfg(unix)]
mod process;
mod utils;
