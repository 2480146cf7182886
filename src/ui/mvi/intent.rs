/// Marker trait for intents.
///
/// Intents are either user input (a key on the contact form) or system
/// events (a timer tick, a submission outcome). Reducers consume them.
pub trait Intent: Send + 'static {}
