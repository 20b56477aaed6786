#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod validator_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod view_router_tests;
