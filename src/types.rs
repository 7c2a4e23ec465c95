multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Contributor Profile — per-address directory entry
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ContributorProfile {
    /// Gate for the reputation-filtered project listing. Starts at 1.
    pub reputation_level: u64,
    /// Accrued outside this contract; reset to 0 on every level increase.
    pub reputation_points: u64,
    /// A banned contributor keeps their profile but is swept out of
    /// every active project when the flag is first set.
    pub is_banned: bool,
}

impl ContributorProfile {
    /// Profile every contributor starts with, and the effective profile
    /// of an address that never registered.
    pub fn base() -> Self {
        ContributorProfile {
            reputation_level: 1,
            reputation_points: 0,
            is_banned: false,
        }
    }
}

// ============================================================
// Project Record — the registry entry for one live project
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProjectRecord<M: ManagedTypeApi> {
    /// Sequential id, assigned from 1 upward and never reused.
    /// Id 0 is the index sentinel and is never assigned.
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub collateral_cost: BigUint<M>,
    /// Minimum reputation level a non-admin caller needs to see this project.
    pub reputation_threshold: u64,
    pub max_contributors: u64,
    /// Address of the externally-deployed project contract. The "active"
    /// flag is queried from it, never cached here.
    pub project_address: ManagedAddress<M>,
}
