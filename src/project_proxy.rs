use multiversx_sc::proxy_imports::*;

pub struct ProjectProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ProjectProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ProjectProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ProjectProxyMethods { wrapped_tx: tx }
    }
}

pub struct ProjectProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ProjectProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn is_active(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isActive")
            .original_result()
    }

    pub fn is_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&member)
            .original_result()
    }

    pub fn remove_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<bool>>(
        self,
        member: Arg0,
        involuntary: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMember")
            .argument(&member)
            .argument(&involuntary)
            .original_result()
    }
}
