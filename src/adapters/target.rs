//! Apply capability for resolved profile lists

use crate::domain::ProfileList;

/// Consumer of an active profile list
///
/// Applying replaces whatever list the target held before; it is never an
/// additive merge.
pub trait ProfileTarget {
    fn apply_profiles(&mut self, profiles: &ProfileList);
}

impl<F> ProfileTarget for F
where
    F: FnMut(&ProfileList),
{
    fn apply_profiles(&mut self, profiles: &ProfileList) {
        self(profiles)
    }
}

/// In-process holder of the currently active profiles
///
/// # Examples
///
/// ```
/// use envslots::adapters::{ActiveProfiles, ProfileTarget};
/// use envslots::domain::ProfileList;
///
/// let mut active = ActiveProfiles::new(ProfileList::parse("default"));
/// active.apply_profiles(&ProfileList::parse("prod|aws"));
/// assert_eq!(active.profiles().as_slice(), ["prod", "aws"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveProfiles {
    profiles: ProfileList,
    applied: usize,
}

impl ActiveProfiles {
    pub fn new(initial: ProfileList) -> Self {
        Self {
            profiles: initial,
            applied: 0,
        }
    }

    pub fn profiles(&self) -> &ProfileList {
        &self.profiles
    }

    /// Number of times a list has been applied to this target
    pub fn applied_count(&self) -> usize {
        self.applied
    }
}

impl ProfileTarget for ActiveProfiles {
    fn apply_profiles(&mut self, profiles: &ProfileList) {
        self.profiles = profiles.clone();
        self.applied += 1;
    }
}
