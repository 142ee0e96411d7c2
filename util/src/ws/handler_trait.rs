use std::future::Future;
use super::runtime::WsContext;

/// Conversion of one inbound text frame into a handler's event type.
///
/// Parsing never fails: unparseable input is expected to map onto a variant
/// of `Self` that the handler drops.
pub trait WsInbound: Send + Sized {
    fn parse(raw: &str) -> Self;
}

pub trait WsHandler: Send + Sync + 'static {
    /// The incoming event type your handler understands (tagged enum recommended)
    type In: WsInbound;

    /// Called once after the socket is fully set up.
    fn on_open(&self, ctx: &WsContext) -> impl Future<Output = ()> + Send {
        async move {
            let _ = ctx;
        }
    }

    /// Called for every text frame, in arrival order. The next frame of the
    /// same connection is not read until this returns.
    fn on_message(&self, ctx: &WsContext, msg: Self::In) -> impl Future<Output = ()> + Send;

    /// Called exactly once when the connection is closing, whatever the reason.
    fn on_close(&self, ctx: &WsContext) -> impl Future<Output = ()> + Send {
        async move {
            let _ = ctx;
        }
    }
}
