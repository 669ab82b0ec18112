use crate::domain::{ParameterSnapshot, UserSnapshot};

use super::Privilege;

pub(super) fn allowed(
    user: &UserSnapshot,
    privilege: Privilege,
    _parameter: &ParameterSnapshot,
) -> bool {
    match privilege {
        Privilege::ExcludeParameter => user.is_expert_a,
        _ => false,
    }
}
