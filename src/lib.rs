#![allow(clippy::missing_errors_doc)]
pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod scale;
pub mod select;
pub mod session;
pub mod transform;
pub mod view;

pub use config::{SliderRange, VisualizerConfig};
pub use entry::{Entry, EntryList};
pub use error::{Result, VisualizerError};
pub use format::format_number;
pub use scale::scale;
pub use select::{argmax, ranked, select_above};
pub use session::Session;
pub use transform::{
    compute, sigmoid_steps, softmax_steps, Mode, Normalization, SigmoidStep, SoftmaxStep, Step,
    Steps,
};
pub use view::Visualization;
