use serde::{Deserialize, Serialize};

use crate::core::{GroupId, OwnerId};
use crate::render::HoverTier;

/// Globally-current hover shared across lanes.
///
/// One track publishes its hit-test result here; every track reads it to
/// pick the dimming tier of its own slices, so hovering a thread in one lane
/// highlights the same process everywhere. The host owns the value and
/// passes it by reference, never through an ambient singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverBroadcast {
    owner: Option<OwnerId>,
    group: Option<GroupId>,
}

impl HoverBroadcast {
    pub fn set(&mut self, owner: Option<OwnerId>, group: Option<GroupId>) {
        self.owner = owner;
        self.group = group;
    }

    pub fn clear(&mut self) {
        self.owner = None;
        self.group = None;
    }

    #[must_use]
    pub fn owner(self) -> Option<OwnerId> {
        self.owner
    }

    #[must_use]
    pub fn group(self) -> Option<GroupId> {
        self.group
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.owner.is_some()
    }

    /// Dimming tier for a slice owned by `owner` within `group`.
    ///
    /// With no hover anywhere every slice gets the same mid-dimmed tone as
    /// the hovered-exact tier.
    #[must_use]
    pub fn tier_for(self, owner: OwnerId, group: Option<GroupId>) -> HoverTier {
        match self.owner {
            None => HoverTier::Focused,
            Some(hovered) if hovered == owner => HoverTier::Focused,
            Some(_) => {
                if self.group.is_some() && self.group == group {
                    HoverTier::SameGroup
                } else {
                    HoverTier::Unrelated
                }
            }
        }
    }
}
