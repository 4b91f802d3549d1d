#[macro_export]
/// Build a Yew `Callback` that captures clones of the listed handles.
/// Every listed variable is cloned once when the callback is created and once more
/// per invocation, so the body can move out of its copies freely.
///
/// ## With the macro
/// The macro can be used in two forms:
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let toggle = callback!([store] {
///     store.toggle();
/// });
/// ```
///
/// 2. With an event parameter:
/// ```compile_fail
/// let on_click = callback!([toggle] |event: MouseEvent| {
///     event.prevent_default();
///     toggle.emit(());
/// });
/// ```
///
/// ## Without the macro
/// ```compile_fail
/// let toggle_clone = toggle.clone();
/// let on_click = Callback::from(move |event: MouseEvent| {
///     let toggle = toggle_clone.clone();
///     event.prevent_default();
///     toggle.emit(());
/// });
/// ```
macro_rules! callback {
    // Must come first: a closure also parses as `$body:expr`
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                $body
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                $body
            })
        }
    };
}
