#[cfg(feature = "tracing")]
macro_rules! wevent {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "pagekit_web", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wevent {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! wdebug {
    ($($tt:tt)*) => { wevent!(debug, $($tt)*) };
}

macro_rules! werror {
    ($($tt:tt)*) => { wevent!(error, $($tt)*) };
}
