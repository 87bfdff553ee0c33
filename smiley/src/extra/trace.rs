#[cfg(feature = "trace")]
#[macro_export]
macro_rules! smiley_trace {
    () => {
        eprint!("\n")
    };
    ($($arg:tt)*) => {{
        eprintln!("[smiley] {}", format!($($arg)*))
    }}
}

#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! smiley_trace {
    () => {};
    ($($arg:tt)*) => {{}};
}
