//! ClanMemberModel -> Member mapper

use roster_core::Member;

use crate::models::ClanMemberModel;

impl From<ClanMemberModel> for Member {
    fn from(model: ClanMemberModel) -> Self {
        Member::new(model.tag, model.name)
    }
}
