//! Shared Tailwind class constants so pages stay visually consistent.

pub struct Theme;

impl Theme {
    /// Text, email, and password inputs.
    pub const INPUT: &'static str = "bg-white border border-gray-300 text-gray-900 text-sm rounded-xl focus:ring-violet-500 focus:border-violet-500 block w-full p-2.5";

    /// Labels above form inputs.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900";

    /// Header navigation links.
    pub const NAV_LINK: &'static str = "block py-2 px-3 text-gray-700 rounded hover:text-violet-900 md:p-0";

    /// White card wrapping list items and forms.
    pub const CARD: &'static str = "bg-white shadow rounded-2xl p-5";

    /// Page headings.
    pub const TITLE: &'static str = "text-2xl font-semibold text-violet-900";

    /// Section headings inside a page.
    pub const SECTION_TITLE: &'static str = "text-lg font-semibold text-violet-900";
}
