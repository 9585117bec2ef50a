//! Operator tooling for the clinical risk engine
//!
//! Backs the `rustcare-risk` binary: argument parsing, logging setup and one
//! handler per subcommand. Handlers write machine-readable output to the
//! supplied writer; logs always go to stderr.
//!
//! ```bash
//! rustcare-risk assess --respiratory-rate 18 --oxygen-saturation 88 \
//!     --heart-rate 78 --systolic-bp 128 --diastolic-bp 82 --oxygen-therapy
//! rustcare-risk analyze --dataset data/Health_Risk_dataset.csv
//! rustcare-risk generate --count 500 --seed 7 --output data/synthetic.csv
//! rustcare-risk evaluate
//! rustcare-risk --config staging.yaml config
//! ```

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::*;
pub use commands::*;
pub use logging::*;
