//! Macros for declaring configurations.

/// Declare a configuration in place.
///
/// Identifiers are stringified into state and event names. Each state
/// block lists `event => target` rules; an empty block declares a state
/// with no outgoing transitions. Expands to a builder chain, so the
/// result is a `Result<Configuration, BuildError>` carrying the same
/// validation as [`ConfigBuilder`](crate::builder::ConfigBuilder).
///
/// # Example
///
/// ```
/// use rewind::states;
///
/// let config = states! {
///     initial: stopped,
///     stopped { play => playing },
///     playing { pause => paused, stop => stopped },
///     paused { play => playing, stop => stopped },
/// }
/// .unwrap();
///
/// assert_eq!(config.initial(), "stopped");
/// assert_eq!(config.state_names(), vec!["stopped", "playing", "paused"]);
/// ```
#[macro_export]
macro_rules! states {
    (
        initial: $initial:ident,
        $(
            $state:ident { $( $event:ident => $target:ident ),* $(,)? }
        ),* $(,)?
    ) => {
        $crate::builder::ConfigBuilder::new()
            .initial(stringify!($initial))
            $(
                .state(
                    $crate::builder::state(stringify!($state))
                        $( .on(stringify!($event), stringify!($target)) )*
                )
            )*
            .build()
    };
}
