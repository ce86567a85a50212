pub mod briefing_profile;

pub use briefing_profile::BriefingProfile;
