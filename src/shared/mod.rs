mod maybe_send;

pub use maybe_send::MaybeSendSync;
