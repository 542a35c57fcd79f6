//! Per-column shift estimators, one module per strategy.
//!
//! | Strategy | Needs key length | Statistic |
//! |----------|------------------|-----------|
//! | [`frequency_peak`] | yes | most frequent letter of each column |
//! | [`mutual_coincidence`] | yes | mutual index of coincidence against column 0 |
//! | [`correlation`] | no, searches it | Pearson correlation against a language profile |

pub mod correlation;
pub mod frequency_peak;
pub mod mutual_coincidence;
