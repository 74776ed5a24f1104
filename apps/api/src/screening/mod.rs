// Resume screening: normalize → score keyword overlap → classify fit.
// The pipeline modules are pure; `intake` and `handlers` adapt it to HTTP.

pub mod classifier;
pub mod handlers;
pub mod intake;
pub mod normalizer;
pub mod pipeline;
pub mod scorer;
pub mod stopwords;

pub use classifier::{classify_fit, FitLabel};
pub use pipeline::{screen_resume, Screener, ScreeningResult};
pub use stopwords::StopWords;
