//! Messages delivered to the app over the async channel.

use crate::models::BusinessRecord;
use crate::source::SourceError;

/// Results of background work, applied to app state between renders.
#[derive(Debug)]
pub enum AppMessage {
    /// A catalog fetch finished (successfully or not).
    SnapshotLoaded(Result<Vec<BusinessRecord>, SourceError>),
}
