//! Domain layer: strong types with validation and invariants (no I/O).

pub mod descriptor;
mod model;
mod request;
mod response;
mod validation;
mod value;

pub use descriptor::{DescriptorAttribute, UnknownDescriptor};
pub use model::{AdditionalInfo, Match, Message, Profile};
pub use request::{GenderFilter, PreferenceUpdate, ReportCause};
pub use response::{MatchesPage, MessagesPage};
pub use validation::ValidationError;
pub use value::{
    AuthToken, MatchId, MessageId, MessageText, OtpCode, PageToken, PhoneNumber, Position,
    ProfileId, RefreshToken,
};
