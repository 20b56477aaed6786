use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMenu, LdTrophy, LdX};
use dioxus_free_icons::Icon;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{Button, ButtonSize, ButtonVariant};

use crate::routes::login_modal::role_icon;
use crate::session::use_login;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Features", "#features"),
    ("Contact", "#contact"),
];

fn login_variant(role: Role) -> ButtonVariant {
    match role {
        Role::Athlete => ButtonVariant::Saffron,
        Role::Coach => ButtonVariant::Green,
        Role::Admin => ButtonVariant::Primary,
    }
}

/// Sticky site header with navigation and one login button per role.
#[component]
pub fn SiteHeader() -> Element {
    let mut login = use_login();
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            div { class: "container site-header-row",
                div { class: "brand",
                    div { class: "brand-mark",
                        Icon::<LdTrophy> { icon: LdTrophy, width: 22, height: 22 }
                    }
                    div {
                        p { class: "brand-name", "Athlete Connect" }
                        p { class: "brand-tagline", "Sports Authority of India" }
                    }
                }

                nav { class: "site-nav",
                    for (name, href) in NAV_ITEMS {
                        a { key: "{name}", href, "{name}" }
                    }
                }

                div { class: "site-login",
                    for role in ALL_ROLES {
                        Button {
                            key: "{role}",
                            variant: login_variant(role),
                            size: ButtonSize::Small,
                            onclick: move |_| login.open(role),
                            {role_icon(role, 16)}
                            "{role.nav_label()}"
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    class: "site-menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon::<LdX> { icon: LdX, width: 20, height: 20 }
                    } else {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                }
            }

            if menu_open() {
                div { class: "container site-mobile-menu",
                    nav { class: "site-mobile-nav",
                        for (name, href) in NAV_ITEMS {
                            a {
                                key: "{name}",
                                href,
                                onclick: move |_| menu_open.set(false),
                                "{name}"
                            }
                        }
                    }
                    div { class: "site-mobile-login",
                        p { class: "site-mobile-heading", "Login Options" }
                        for role in ALL_ROLES {
                            Button {
                                key: "{role}",
                                variant: ButtonVariant::Ghost,
                                class: "site-mobile-option",
                                onclick: move |_| {
                                    login.open(role);
                                    menu_open.set(false);
                                },
                                {role_icon(role, 16)}
                                div {
                                    p { class: "site-mobile-label", "{role.nav_label()}" }
                                    p { class: "site-mobile-description", "{role.nav_description()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
