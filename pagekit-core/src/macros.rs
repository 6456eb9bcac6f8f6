// Log events go to `tracing` under the "pagekit" target. Without the feature every macro
// expands to nothing, so arguments must not carry side effects.

#[cfg(feature = "tracing")]
macro_rules! pevent {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "pagekit", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pevent {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! ptrace {
    ($($tt:tt)*) => { pevent!(trace, $($tt)*) };
}

macro_rules! pdebug {
    ($($tt:tt)*) => { pevent!(debug, $($tt)*) };
}

macro_rules! pwarn {
    ($($tt:tt)*) => { pevent!(warn, $($tt)*) };
}
