use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdShield, LdTrophy, LdUser};
use dioxus_free_icons::Icon;
use gateway::{Authenticator, DemoAuthenticator};
use shared_types::{demo_account, FeatureFlags, LoginSettings, Notice, Role, Submission};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Dialog, DialogDescription, DialogTitle,
    FormField, Input,
};

use crate::notify;
use crate::session::{use_login, use_session};

/// Icon identifying `role` on login buttons and the dialog title.
pub fn role_icon(role: Role, size: u32) -> Element {
    match role {
        Role::Athlete => rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: size, height: size } },
        Role::Coach => rsx! { Icon::<LdUser> { icon: LdUser, width: size, height: size } },
        Role::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
    }
}

/// Login dialog for whichever role the flow is bound to.
///
/// Mounted once on the landing page; stays hidden while the flow is idle.
#[component]
pub fn LoginModal() -> Element {
    let mut login = use_login();
    let flow = *login.flow.read();

    let Some(role) = flow.selected_role().filter(|_| flow.is_open()) else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        Dialog { open: true, on_dismiss: move |_| login.close(),
            LoginForm { key: "{role}", role }
        }
    }
}

#[component]
fn LoginForm(role: Role) -> Element {
    let mut login = use_login();
    let mut session = use_session();
    let flags: FeatureFlags = use_context();
    let settings: LoginSettings = use_context();
    let toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let busy = login.flow.read().is_busy();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let submission = login.flow.write().submit(&email(), &password());
        match submission {
            Submission::Accepted { role, credential } => {
                field_errors.set(HashMap::new());
                let authenticator = DemoAuthenticator::from_settings(&settings);
                spawn(async move {
                    match authenticator.authenticate(role, credential).await {
                        Ok(identity) => {
                            let notice = login.flow.write().finish(&mut session, identity);
                            if let Some(notice) = notice {
                                notify::show(&toast, &notice);
                            }
                        }
                        Err(err) => {
                            tracing::warn!(%role, error = %err, "login failed");
                            login.flow.write().fail();
                            notify::show(&toast, &Notice::from(&err));
                        }
                    }
                });
            }
            Submission::Rejected(err) => {
                notify::show(&toast, &Notice::from(&err));
                field_errors.set(err.field_errors);
            }
            Submission::Busy => tracing::debug!("login already in flight"),
            Submission::Ignored => tracing::debug!("submit with no login dialog open"),
        }
    };

    let fill_sample = move |_| {
        let sample = demo_account(role).sample_credential();
        email.set(sample.email);
        password.set(sample.password);
        field_errors.set(HashMap::new());
    };

    let demo = demo_account(role);
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        DialogTitle {
            span { class: "login-title-icon login-accent-{role}", {role_icon(role, 22)} }
            "{role.login_title()}"
        }
        DialogDescription { "{role.login_description()}" }

        form { class: "login-form", onsubmit: handle_submit,
            FormField {
                id: "login-email",
                label: "Email",
                error: field_errors.read().get("email").cloned(),
                Input {
                    id: "login-email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    disabled: busy,
                    invalid: field_errors.read().contains_key("email"),
                    on_input: move |e: FormEvent| {
                        email.set(e.value());
                        field_errors.write().remove("email");
                    },
                }
            }

            FormField {
                id: "login-password",
                label: "Password",
                error: field_errors.read().get("password").cloned(),
                Input {
                    id: "login-password",
                    input_type: password_type.to_string(),
                    placeholder: "Enter your password",
                    value: password(),
                    disabled: busy,
                    invalid: field_errors.read().contains_key("password"),
                    on_input: move |e: FormEvent| {
                        password.set(e.value());
                        field_errors.write().remove("password");
                    },
                    trailing: rsx! {
                        button {
                            r#type: "button",
                            class: "login-password-toggle",
                            aria_label: if show_password() { "Hide password" } else { "Show password" },
                            onclick: move |_| show_password.toggle(),
                            if show_password() {
                                Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                            } else {
                                Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                            }
                        }
                    },
                }
            }

            if flags.sample_credentials {
                div { class: "login-demo",
                    p { class: "login-demo-heading", "Demo credentials" }
                    p { "Email: {demo.email}" }
                    p { "Password: {demo.sample_password}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        disabled: busy,
                        onclick: fill_sample,
                        "Use Sample Credentials (Demo)"
                    }
                }
            }

            Button {
                button_type: "submit",
                size: ButtonSize::Large,
                disabled: busy,
                class: "login-submit",
                if busy { "Logging in..." } else { "Login" }
            }
        }
    }
}
