use std::collections::HashMap;
use tallyup_domain::{Member, MemberId};

/// Resolves member ids to the names shown in tables.
pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.get(&member_id).map(String::as_str)
    }
}

impl MemberDirectory for Vec<Member> {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.iter()
            .find(|member| member.id == member_id)
            .map(|member| member.name.as_str())
    }
}
