// Test double for an externally-deployed project contract. Exposes the
// membership surface the registry drives during ban propagation, records
// how each member was removed so tests can assert the involuntary flag,
// and can call back into the registry to deregister itself.

#![no_std]

multiversx_sc::imports!();

pub mod proxy;

/// No removal recorded for the member.
pub const REMOVAL_NONE: u8 = 0;
/// Member left voluntarily.
pub const REMOVAL_VOLUNTARY: u8 = 1;
/// Member was force-removed (ban propagation).
pub const REMOVAL_INVOLUNTARY: u8 = 2;

#[multiversx_sc::contract]
pub trait ProjectMock {
    #[init]
    fn init(&self) {
        self.active().set(true);
    }

    #[endpoint(setActive)]
    fn set_active(&self, active: bool) {
        self.active().set(active);
    }

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        self.project_members().insert(member);
    }

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress, involuntary: bool) {
        self.project_members().swap_remove(&member);
        let kind = if involuntary {
            REMOVAL_INVOLUNTARY
        } else {
            REMOVAL_VOLUNTARY
        };
        self.removals(&member).set(kind);
    }

    /// Calls back into the registry to drop this project from the index,
    /// the way a real project contract deregisters itself.
    #[endpoint(deregister)]
    fn deregister(&self, registry: ManagedAddress) {
        self.tx().to(&registry).raw_call("deleteProject").sync_call();
    }

    #[view(isActive)]
    fn is_active(&self) -> bool {
        self.active().get()
    }

    #[view(isMember)]
    fn is_member(&self, member: ManagedAddress) -> bool {
        self.project_members().contains(&member)
    }

    #[view(removalKind)]
    fn removal_kind(&self, member: ManagedAddress) -> u8 {
        self.removals(&member).get()
    }

    #[storage_mapper("active")]
    fn active(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("projectMembers")]
    fn project_members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("removals")]
    fn removals(&self, member: &ManagedAddress) -> SingleValueMapper<u8>;
}
