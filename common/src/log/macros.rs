//! Logging macros.
//!
//! Each leveled macro comes in two forms:
//!
//! ```ignore
//! log_module_register!(main);
//!
//! log_info!("Hello, {}!", name);                     // uses LOG_MODULE in scope
//! log_info!(module: OTHER_MODULE, "Hello, {}!", name); // explicit module const
//! ```
//!
//! The level check runs in a `const` block, so a disabled call expands to
//! dead code and its arguments are never evaluated.

/// Declare the `LOG_MODULE` constant the leveled macros use in this scope.
///
/// ```ignore
/// log_module_register!();                        // "app", build default level
/// log_module_register!(main);                    // "main", build default level
/// log_module_register!(sensor, LevelFilter::Warning);
/// ```
#[macro_export]
macro_rules! log_module_register {
    () => {
        #[allow(dead_code)]
        const LOG_MODULE: $crate::log::LogModule = $crate::log::LogModule::new($crate::config::DEFAULT_LOG_MODULE);
    };
    ($name:ident) => {
        #[allow(dead_code)]
        const LOG_MODULE: $crate::log::LogModule = $crate::log::LogModule::new(stringify!($name));
    };
    ($name:ident, $level:expr) => {
        #[allow(dead_code)]
        const LOG_MODULE: $crate::log::LogModule = $crate::log::LogModule::new(stringify!($name)).with_level($level);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($module:expr, $level:expr, $($arg:tt)+) => {
        if const { $module.enabled($level) } {
            $crate::log::emit(
                &$module,
                $level,
                $crate::log::SourceLocation::new(file!(), line!()),
                format_args!($($arg)+),
            );
        }
    };
}

/// Log at info level.
#[macro_export]
macro_rules! log_info {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log!($module, $crate::log::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(LOG_MODULE, $crate::log::Level::Info, $($arg)+)
    };
}

/// Log at warning level.
#[macro_export]
macro_rules! log_warning {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log!($module, $crate::log::Level::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(LOG_MODULE, $crate::log::Level::Warning, $($arg)+)
    };
}

/// Log at error level.
#[macro_export]
macro_rules! log_error {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log!($module, $crate::log::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(LOG_MODULE, $crate::log::Level::Error, $($arg)+)
    };
}

/// Log at debug level. Compiled out unless the module threshold is `Debug`.
#[macro_export]
macro_rules! log_debug {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log!($module, $crate::log::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!(LOG_MODULE, $crate::log::Level::Debug, $($arg)+)
    };
}

/// Report the current thread's unused stack as a warning.
///
/// Expands to nothing unless both `thread-stack-info` and `init-stacks` are
/// enabled. Stays silent when no probe is installed or it cannot measure.
#[macro_export]
macro_rules! log_stack_info {
    () => {
        $crate::log_stack_info!(module: LOG_MODULE)
    };
    (module: $module:expr) => {
        if const { $crate::config::STACK_INFO } {
            $crate::stack::emit_report(&$module, $crate::log::SourceLocation::new(file!(), line!()));
        }
    };
}
