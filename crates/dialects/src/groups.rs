//! Repeating group definitions
//!
//! A small table of common groups per dialect. Field orders list the
//! delimiter first.

use contracts::Group;

/// Static description of a repeating group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    pub msg_type: &'static str,
    pub counter_tag: u32,
    pub delimiter: u32,
    pub field_order: &'static [u32],
}

impl GroupSpec {
    pub const fn new(
        msg_type: &'static str,
        counter_tag: u32,
        delimiter: u32,
        field_order: &'static [u32],
    ) -> Self {
        Self {
            msg_type,
            counter_tag,
            delimiter,
            field_order,
        }
    }

    pub fn build(&self) -> Group {
        Group::new(self.counter_tag, self.delimiter, self.field_order.to_vec())
    }
}

/// Build the group of `msg_type` announced by `counter_tag`, if known
pub fn find_group(specs: &[GroupSpec], msg_type: &str, counter_tag: u32) -> Option<Group> {
    specs
        .iter()
        .find(|spec| spec.msg_type == msg_type && spec.counter_tag == counter_tag)
        .map(GroupSpec::build)
}

/// News: NoLinesOfText
pub const LINES_OF_TEXT: GroupSpec = GroupSpec::new("B", 33, 58, &[58]);
/// NewOrderSingle: NoAllocs
pub const ALLOCS: GroupSpec = GroupSpec::new("D", 78, 79, &[79, 80]);
/// NewOrderSingle: NoPartyIDs
pub const PARTY_IDS: GroupSpec = GroupSpec::new("D", 453, 448, &[448, 447, 452]);
/// MarketDataRequest: NoMDEntryTypes
pub const MD_ENTRY_TYPES: GroupSpec = GroupSpec::new("V", 267, 269, &[269]);
/// MarketDataRequest: NoRelatedSym
pub const RELATED_SYM: GroupSpec = GroupSpec::new("V", 146, 55, &[55, 65, 48, 22]);
/// MarketDataSnapshotFullRefresh: NoMDEntries
pub const MD_ENTRIES: GroupSpec = GroupSpec::new("W", 268, 269, &[269, 270, 15, 271]);
/// Logon: NoMsgTypes
pub const MSG_TYPES: GroupSpec = GroupSpec::new("A", 384, 372, &[372, 385]);

pub(crate) const FIX40_GROUPS: &[GroupSpec] = &[LINES_OF_TEXT, ALLOCS];
pub(crate) const FIX42_GROUPS: &[GroupSpec] =
    &[LINES_OF_TEXT, ALLOCS, MD_ENTRY_TYPES, RELATED_SYM, MD_ENTRIES];
pub(crate) const FIX43_GROUPS: &[GroupSpec] = &[
    LINES_OF_TEXT,
    ALLOCS,
    PARTY_IDS,
    MD_ENTRY_TYPES,
    RELATED_SYM,
    MD_ENTRIES,
    MSG_TYPES,
];
pub(crate) const FIX50_GROUPS: &[GroupSpec] = &[
    LINES_OF_TEXT,
    ALLOCS,
    PARTY_IDS,
    MD_ENTRY_TYPES,
    RELATED_SYM,
    MD_ENTRIES,
];
pub(crate) const FIXT11_GROUPS: &[GroupSpec] = &[MSG_TYPES];
