// Test double for the fungible token the registry consults as its
// balance oracle and calls for owner fund withdrawal. Balances are
// assigned directly by the test harness; transfers can be forced to
// report failure to exercise the registry's error path.

#![no_std]

multiversx_sc::imports!();

pub mod proxy;

#[multiversx_sc::contract]
pub trait HolderTokenMock {
    #[init]
    fn init(&self) {}

    #[endpoint(setBalance)]
    fn set_balance(&self, address: ManagedAddress, amount: BigUint) {
        self.balances(&address).set(amount);
    }

    #[endpoint(setTransfersFail)]
    fn set_transfers_fail(&self, fail: bool) {
        self.transfers_fail().set(fail);
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        if self.transfers_fail().get() {
            return false;
        }
        let caller = self.blockchain().get_caller();
        let sender_balance = self.balances(&caller).get();
        if amount > sender_balance {
            return false;
        }
        self.balances(&caller).set(sender_balance - &amount);
        self.balances(&to).update(|balance| *balance += amount);
        true
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("transfersFail")]
    fn transfers_fail(&self) -> SingleValueMapper<bool>;
}
