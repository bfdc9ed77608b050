//! The document shell and the Tailwind utility classes shared across views.

use maud::{DOCTYPE, Markup, html};

// Link styles
pub const LINK_STYLE: &str =
    "text-blue-600 underline hover:text-blue-500 dark:text-blue-500 dark:hover:text-blue-400";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 rounded text-white bg-blue-500 \
    hover:enabled:bg-blue-600 dark:bg-blue-600 hover:enabled:dark:bg-blue-700 \
    disabled:bg-blue-700";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 underline bg-transparent border-none \
    cursor-pointer hover:text-red-500 dark:text-red-500 dark:hover:text-red-400";

// Form styles
pub const FORM_CONTAINER_STYLE: &str =
    "flex flex-col items-center max-w-md mx-auto px-6 py-8 text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm text-gray-900 \
    bg-gray-50 border border-gray-300 focus:ring-blue-600 focus:border-blue-600 \
    dark:text-white dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 \
    focus:dark:ring-blue-500 focus:dark:border-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str =
    "text-xs uppercase text-gray-700 bg-gray-50 dark:text-gray-400 dark:bg-gray-700";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

/// Wrap `content` in the HTML document shell shared by every page.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Cashbook" }
                link href="/static/main.css" rel="stylesheet";

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8" {}
            }

            body
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// A full-page error view with a large status code `header`, a one-line
/// `description`, and a `fix` telling the user what to do about it.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="max-w-screen-sm mx-auto py-8 px-4 text-center lg:py-16"
            {
                h1
                    class="mb-4 text-7xl font-extrabold tracking-tight \
                        text-blue-600 lg:text-9xl dark:text-blue-500"
                {
                    (header)
                }

                p
                    class="mb-4 text-3xl font-bold tracking-tight \
                        text-gray-900 md:text-4xl dark:text-white"
                {
                    (description)
                }

                p class="mb-4 text-lg text-gray-500 dark:text-gray-400"
                {
                    (fix)
                }

                a
                    href="/"
                    class="inline-flex my-4 px-5 py-2.5 rounded text-sm font-medium \
                        text-center text-white bg-blue-600 hover:bg-blue-800 \
                        focus:ring-4 focus:ring-blue-300 dark:focus:ring-blue-900"
                {
                    "Back to Transactions"
                }
            }
        }
    );

    base(title, &content)
}
