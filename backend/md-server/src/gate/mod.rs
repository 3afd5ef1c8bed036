pub mod access_gate;
pub mod gate_decision;
pub mod gate_request;
pub mod gate_scope;
pub mod middleware;
