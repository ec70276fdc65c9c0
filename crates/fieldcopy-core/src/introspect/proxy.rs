use crate::model::BeanType;

///
/// ProxyResolver
///
/// Decides whether a bean level is a generated wrapper that should be
/// looked through. The introspector unwraps to the parent level for as long
/// as the resolver answers yes (and a parent exists).
///

pub trait ProxyResolver {
    fn is_proxy(&self, ty: &BeanType) -> bool;
}

///
/// DeclaredProxies
///
/// Trusts the type's own declaration (`#[bean(proxy)]`).
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredProxies;

impl ProxyResolver for DeclaredProxies {
    fn is_proxy(&self, ty: &BeanType) -> bool {
        ty.proxy
    }
}

///
/// NoProxies
///
/// Never unwraps.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoProxies;

impl ProxyResolver for NoProxies {
    fn is_proxy(&self, _: &BeanType) -> bool {
        false
    }
}

impl<F> ProxyResolver for F
where
    F: Fn(&BeanType) -> bool,
{
    fn is_proxy(&self, ty: &BeanType) -> bool {
        self(ty)
    }
}
