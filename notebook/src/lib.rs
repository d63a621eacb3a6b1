//! Handwriting notebook engine.
//!
//! This crate owns the animation side of the subscriber notebook: a two-page,
//! fourteen-line notebook that a virtual hand writes names into, one at a
//! time, in arrival order. The host (the terminal viewer, or any other
//! rendering layer) feeds name payloads in and implements [`surface::Surface`]
//! to draw the [`timeline::Action`]s the scheduler emits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scheduler`] | Line queue, slot selection, and the single-flight session state machine |
//! | [`driver`] | Tokio task that owns a [`scheduler::Scheduler`] and sleeps between steps |
//! | [`writer`] | Character-by-character write plan with a tracking pen |
//! | [`strike`] | Strike-through flourish played after every write |
//! | [`layout`] | Line number to on-screen slot geometry |
//! | [`slots`] | Fixed arena of the fourteen notebook slots |
//! | [`measure`] | Approximate handwriting font metrics |
//! | [`hand`] | Pen poses, hand styles, and easing curves |
//! | [`timeline`] | Step timing and render actions |
//! | [`names`] | Splitting event payloads into names |
//! | [`surface`] | Rendering-layer trait |
//! | [`consts`] | Layout percentages and default durations |

pub mod consts;
pub mod driver;
pub mod hand;
pub mod layout;
pub mod measure;
pub mod names;
pub mod scheduler;
pub mod slots;
pub mod strike;
pub mod surface;
pub mod timeline;
pub mod writer;
