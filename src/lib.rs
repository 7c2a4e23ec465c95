#![no_std]

multiversx_sc::imports!();

pub mod project_proxy;
pub mod registry_proxy;
pub mod token_proxy;
pub mod types;

use types::{ContributorProfile, ProjectRecord};

// ============================================================
// Constants
// ============================================================

/// Reserved index id: never assigned to a project, doubles as the
/// anchor node of the registry index and as "not found" in lookups.
const SENTINEL_ID: u64 = 0;

/// Effective reputation level of a caller who never registered.
const DEFAULT_REPUTATION_LEVEL: u64 = 1;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait ProjectRegistry {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, token_address: ManagedAddress) {
        let deployer = self.blockchain().get_caller();
        self.token_address().set(&token_address);
        self.owner().set(&deployer);
        self.admins().insert(deployer);
        self.paused().set(false);
        self.last_project_id().set(SENTINEL_ID);
        self.live_project_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: role authority
    // Owner-only, never gated by the pause switch.
    // ========================================================

    #[endpoint(grantAdmin)]
    fn grant_admin(&self, address: ManagedAddress) {
        self.require_owner();
        // Idempotent: re-granting an existing admin is a success no-op
        self.admins().insert(address);
    }

    #[endpoint(revokeAdmin)]
    fn revoke_admin(&self, address: ManagedAddress) {
        self.require_owner();
        // Revoking a non-admin is a success no-op
        self.admins().swap_remove(&address);
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        self.owner().set(&new_owner);
    }

    // ========================================================
    // ENDPOINT: setPaused
    // Admin-settable kill switch over every mutating endpoint
    // except role management and owner fund withdrawal.
    // ========================================================

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.require_admin();
        self.paused().set(paused);
    }

    // ========================================================
    // ENDPOINT: registerSelf
    // Self-service contributor registration, holder-gated via
    // the token balance oracle.
    // ========================================================

    #[endpoint(registerSelf)]
    fn register_self(&self) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        require!(
            !self.contributors().contains(&caller),
            "Already registered"
        );
        require!(self.is_holder(&caller), "Permission denied");

        self.profiles(&caller).set(ContributorProfile::base());
        self.contributors().insert(caller.clone());

        self.contributor_registered_event(&caller);
    }

    // ========================================================
    // ENDPOINT: setProfile
    // Admin-only full overwrite of a contributor profile.
    // Never cascades; only setBanned triggers the ban sweep.
    // ========================================================

    #[endpoint(setProfile)]
    fn set_profile(&self, contributor: ManagedAddress, profile: ContributorProfile) {
        self.require_admin();
        self.require_not_paused();
        self.require_registered(&contributor);

        self.profiles(&contributor).set(profile);
    }

    // ========================================================
    // ENDPOINT: increaseReputation
    // Promotion resets accrued points: they count toward the
    // next level-up, which external reward logic restarts at 0.
    // ========================================================

    #[endpoint(increaseReputation)]
    fn increase_reputation(&self, contributor: ManagedAddress, levels: u64) {
        self.require_admin();
        self.require_not_paused();
        self.require_registered(&contributor);
        require!(levels > 0, "Invalid parameter");

        self.profiles(&contributor).update(|profile| {
            profile.reputation_level += levels;
            profile.reputation_points = 0;
        });
    }

    // ========================================================
    // ENDPOINT: setBanned
    // Toggling to true sweeps the whole registry and force-removes
    // the contributor from every active project. Toggling back to
    // false never re-adds them anywhere.
    // ========================================================

    #[endpoint(setBanned)]
    fn set_banned(&self, contributor: ManagedAddress, state: bool) {
        self.require_admin();
        self.require_not_paused();
        self.require_registered(&contributor);

        let mut profile = self.profiles(&contributor).get();
        let newly_banned = state && !profile.is_banned;
        profile.is_banned = state;
        // Own bookkeeping is committed before any cross-contract call,
        // so a re-entrant callback already observes the ban.
        self.profiles(&contributor).set(&profile);

        if newly_banned {
            self.propagate_ban(&contributor);
        }
    }

    // ========================================================
    // ENDPOINT: createProject
    // Admin-only registration of an externally deployed project
    // contract. Recording the reverse lookup entry is what arms
    // the project's deleteProject callback.
    // ========================================================

    #[endpoint(createProject)]
    fn create_project(
        &self,
        project_address: ManagedAddress,
        name: ManagedBuffer,
        collateral_cost: BigUint,
        reputation_threshold: u64,
        max_contributors: u64,
    ) {
        self.require_admin();
        self.require_not_paused();

        require!(
            !name.is_empty()
                && collateral_cost > 0u64
                && reputation_threshold > 0
                && max_contributors > 0,
            "Invalid project parameters"
        );
        require!(
            self.project_ids(&project_address).get() == SENTINEL_ID,
            "Project already registered"
        );

        let project_id = self.last_project_id().get() + 1;
        self.last_project_id().set(project_id);

        let record = ProjectRecord {
            id: project_id,
            name: name.clone(),
            collateral_cost,
            reputation_threshold,
            max_contributors,
            project_address: project_address.clone(),
        };
        self.projects(project_id).set(&record);

        self.index_push_front(project_id);
        self.live_project_count().update(|count| *count += 1);
        self.project_ids(&project_address).set(project_id);

        self.project_created_event(&project_address, project_id, &name);
    }

    // ========================================================
    // ENDPOINT: deleteProject
    // Self-deregistration: callable only by a registered project
    // contract on its own behalf, authorized via reverse lookup
    // rather than any role.
    // ========================================================

    #[endpoint(deleteProject)]
    fn delete_project(&self) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let project_id = self.project_ids(&caller).get();
        require!(
            project_id != SENTINEL_ID,
            "Not registered or already deleted"
        );

        self.project_ids(&caller).clear();
        self.index_remove(project_id);
        self.live_project_count().update(|count| *count -= 1);
        self.deleted_projects().push(&caller);
    }

    // ========================================================
    // ENDPOINT: withdrawFunds
    // Owner-only boundary call into the token contract. Exempt
    // from the pause switch; mutates no registry state.
    // ========================================================

    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self) {
        self.require_owner();

        let token_address = self.token_address().get();
        let own_address = self.blockchain().get_sc_address();
        let balance: BigUint = self
            .tx()
            .to(&token_address)
            .typed(token_proxy::TokenProxy)
            .balance_of(own_address)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(balance > 0u64, "No funds to withdraw");

        let owner = self.owner().get();
        let transferred: bool = self
            .tx()
            .to(&token_address)
            .typed(token_proxy::TokenProxy)
            .transfer(owner, balance)
            .returns(ReturnsResult)
            .sync_call();
        require!(transferred, "Transfer failed");
    }

    // ========================================================
    // INTERNAL: ban propagation
    // Full front-to-back sweep of the registry index. A member
    // logically belongs to at most one active project, but the
    // scan is exhaustive and never terminates early.
    // ========================================================

    fn propagate_ban(&self, contributor: &ManagedAddress) {
        let mut current_id = self.project_node_next(SENTINEL_ID).get();
        while current_id != SENTINEL_ID {
            // Capture the successor before any external call
            let next_id = self.project_node_next(current_id).get();
            let project_address = self.projects(current_id).get().project_address;

            let active: bool = self
                .tx()
                .to(&project_address)
                .typed(project_proxy::ProjectProxy)
                .is_active()
                .returns(ReturnsResult)
                .sync_call_readonly();

            if active {
                let member: bool = self
                    .tx()
                    .to(&project_address)
                    .typed(project_proxy::ProjectProxy)
                    .is_member(contributor.clone())
                    .returns(ReturnsResult)
                    .sync_call_readonly();

                if member {
                    self.tx()
                        .to(&project_address)
                        .typed(project_proxy::ProjectProxy)
                        .remove_member(contributor.clone(), true)
                        .sync_call();
                }
            }

            current_id = next_id;
        }
    }

    // ========================================================
    // INTERNAL: registry index
    // Intrusive doubly-linked list over project ids. Node 0 is
    // the sentinel: its next is the head, its prev the tail.
    // Absent storage decodes to 0, so the empty index needs no
    // initialization and "next == 0" terminates traversal.
    // ========================================================

    fn index_push_front(&self, project_id: u64) {
        let old_head = self.project_node_next(SENTINEL_ID).get();
        self.project_node_next(SENTINEL_ID).set(project_id);
        self.project_node_prev(project_id).set(SENTINEL_ID);
        self.project_node_next(project_id).set(old_head);
        self.project_node_prev(old_head).set(project_id);
    }

    fn index_remove(&self, project_id: u64) {
        let prev_id = self.project_node_prev(project_id).get();
        let next_id = self.project_node_next(project_id).get();
        self.project_node_next(prev_id).set(next_id);
        self.project_node_prev(next_id).set(prev_id);
        self.project_node_next(project_id).clear();
        self.project_node_prev(project_id).clear();
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "Permission denied");
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.has_admin_rights(&caller), "Permission denied");
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), "System is paused");
    }

    fn require_registered(&self, contributor: &ManagedAddress) {
        require!(
            self.contributors().contains(contributor),
            "Not a registered contributor"
        );
    }

    /// Owner is implicitly privileged above admin.
    fn has_admin_rights(&self, address: &ManagedAddress) -> bool {
        *address == self.owner().get() || self.admins().contains(address)
    }

    /// Holder standing: admin rights, or a positive balance reported
    /// by the token oracle. Read-only precondition query, always made
    /// before any state mutation.
    fn is_holder(&self, address: &ManagedAddress) -> bool {
        if self.has_admin_rights(address) {
            return true;
        }
        let token_address = self.token_address().get();
        let balance: BigUint = self
            .tx()
            .to(&token_address)
            .typed(token_proxy::TokenProxy)
            .balance_of(address.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        balance > 0u64
    }

    fn effective_reputation_level(&self, address: &ManagedAddress) -> u64 {
        if self.contributors().contains(address) {
            self.profiles(address).get().reputation_level
        } else {
            DEFAULT_REPUTATION_LEVEL
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isOwner)]
    fn is_owner(&self, address: ManagedAddress) -> bool {
        address == self.owner().get()
    }

    #[view(isAdmin)]
    fn is_admin(&self, address: ManagedAddress) -> bool {
        self.has_admin_rights(&address)
    }

    #[view(getAdmins)]
    fn get_admins(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for admin in self.admins().iter() {
            result.push(admin);
        }
        result
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    #[view(isRegisteredContributor)]
    fn is_registered_contributor(&self, address: ManagedAddress) -> bool {
        self.contributors().contains(&address)
    }

    #[view(getProfile)]
    fn get_profile(&self, address: ManagedAddress) -> ContributorProfile {
        if self.contributors().contains(&address) {
            self.profiles(&address).get()
        } else {
            ContributorProfile::base()
        }
    }

    #[view(getContributors)]
    fn get_contributors(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for contributor in self.contributors().iter() {
            result.push(contributor);
        }
        result
    }

    #[view(getProject)]
    fn get_project(&self, project_id: u64) -> ProjectRecord<Self::Api> {
        self.projects(project_id).get()
    }

    /// All live projects in index order, newest first.
    #[view(getAllProjects)]
    fn get_all_projects(&self) -> MultiValueEncoded<ProjectRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let mut current_id = self.project_node_next(SENTINEL_ID).get();
        while current_id != SENTINEL_ID {
            result.push(self.projects(current_id).get());
            current_id = self.project_node_next(current_id).get();
        }
        result
    }

    /// Archived project handles in deletion order, oldest first.
    #[view(getDeletedProjects)]
    fn get_deleted_projects(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let count = self.deleted_projects().len();
        for i in 1..=count {
            result.push(self.deleted_projects().get(i));
        }
        result
    }

    #[view(getProjectCount)]
    fn get_project_count(&self) -> u64 {
        self.live_project_count().get()
    }

    // ========================================================
    // VIEW: getVisibleProjects
    // Caller-scoped listing. Admins see everything; any other
    // caller must hold the token and sees only projects whose
    // threshold their reputation level reaches.
    // ========================================================

    #[view(getVisibleProjects)]
    fn get_visible_projects(&self) -> MultiValueEncoded<ProjectRecord<Self::Api>> {
        let caller = self.blockchain().get_caller();
        if self.has_admin_rights(&caller) {
            return self.get_all_projects();
        }
        require!(self.is_holder(&caller), "Holder required");

        let level = self.effective_reputation_level(&caller);
        let mut result = MultiValueEncoded::new();
        let mut current_id = self.project_node_next(SENTINEL_ID).get();
        while current_id != SENTINEL_ID {
            let record = self.projects(current_id).get();
            if record.reputation_threshold <= level {
                result.push(record);
            }
            current_id = self.project_node_next(current_id).get();
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("projectCreated")]
    fn project_created_event(
        &self,
        #[indexed] project: &ManagedAddress,
        #[indexed] project_id: u64,
        name: &ManagedBuffer,
    );

    #[event("contributorRegistered")]
    fn contributor_registered_event(&self, #[indexed] contributor: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Roles ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("admins")]
    fn admins(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    // ── Contributor directory ──

    #[storage_mapper("contributors")]
    fn contributors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("profiles")]
    fn profiles(&self, contributor: &ManagedAddress) -> SingleValueMapper<ContributorProfile>;

    // ── Project registry ──

    #[storage_mapper("lastProjectId")]
    fn last_project_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("liveProjectCount")]
    fn live_project_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("projects")]
    fn projects(&self, project_id: u64) -> SingleValueMapper<ProjectRecord<Self::Api>>;

    // ── Registry index: intrusive linked list over ids ──

    #[storage_mapper("projectNodeNext")]
    fn project_node_next(&self, project_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("projectNodePrev")]
    fn project_node_prev(&self, project_id: u64) -> SingleValueMapper<u64>;

    // ── Reverse lookup: project address -> registry id (0 = none) ──

    #[storage_mapper("projectIds")]
    fn project_ids(&self, project_address: &ManagedAddress) -> SingleValueMapper<u64>;

    // ── Append-only archive of deleted project handles ──

    #[storage_mapper("deletedProjects")]
    fn deleted_projects(&self) -> VecMapper<ManagedAddress>;
}
