use multiversx_sc::proxy_imports::*;

pub struct ProjectMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ProjectMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ProjectMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ProjectMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct ProjectMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ProjectMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> ProjectMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_active<Arg0: ProxyArg<bool>>(
        self,
        active: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setActive")
            .argument(&active)
            .original_result()
    }

    pub fn add_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMember")
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

    pub fn deregister<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        registry: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("deregister")
            .argument(&registry)
            .original_result()
    }

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

    pub fn removal_kind<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u8> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removalKind")
            .argument(&member)
            .original_result()
    }
}
