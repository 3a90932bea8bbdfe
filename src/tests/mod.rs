mod handle;
#[cfg(feature = "locked")]
mod locked;
