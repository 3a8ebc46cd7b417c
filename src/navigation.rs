//! The navigation bar shown at the top of every page for logged in users.

use maud::{Markup, html};

use crate::{endpoints, html::APP_NAME};

/// A link in the navigation bar.
///
/// It will change appearance if `is_current` is set to `true`. Only one link
/// should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
            lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
            lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
            dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
            dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
    user_name: Option<&'a str>,
}

impl<'a> NavBar<'a> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'a> {
        let links = [
            (endpoints::DASHBOARD_VIEW, "Dashboard"),
            (endpoints::TRANSACTIONS_VIEW, "Transactions"),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .chain(std::iter::once(Link {
            url: endpoints::LOG_OUT,
            title: "Log out",
            is_current: false,
        }))
        .collect();

        NavBar {
            links,
            user_name: None,
        }
    }

    /// Show the logged in user's name next to the links.
    pub fn with_user_name(mut self, user_name: Option<&'a str>) -> Self {
        self.user_name = user_name;
        self
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        (APP_NAME)
                    }

                    div class="flex flex-wrap items-center gap-6"
                    {
                        @if let Some(user_name) = self.user_name {
                            span
                                id="user-name"
                                class="text-sm text-gray-500 dark:text-gray-400"
                            {
                                (user_name)
                            }
                        }

                        ul
                            class="font-medium flex flex-row gap-4 lg:gap-8 p-0
                            rtl:space-x-reverse dark:bg-gray-900"
                        {
                            @for link in self.links {
                                li { (link.into_html()) }
                            }
                        }
                    }
                }
            }
        )
    }
}
