//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a compact
/// declaration. Evaluates to `Result<MachineConfig, BuildError>`.
///
/// # Example
///
/// ```
/// use retrace::machine_config;
///
/// let config = machine_config! {
///     initial: idle,
///     idle { start => running },
///     running { stop => idle, pause => paused },
///     paused { resume => running },
/// }
/// .unwrap();
///
/// assert_eq!(config.target("running", "pause"), Some("paused"));
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        $(
            $state:ident { $($event:ident => $target:ident),* $(,)? }
        ),* $(,)?
    ) => {
        $crate::builder::ConfigBuilder::new()
            .initial(stringify!($initial))
            $(
                .state(stringify!($state), |s| {
                    s $(.on(stringify!($event), stringify!($target)))*
                })
            )*
            .build()
    };
}
