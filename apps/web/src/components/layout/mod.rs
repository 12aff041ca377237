mod app_shell;
mod site_footer;
mod site_header;

pub(crate) use app_shell::AppShell;
pub(crate) use site_footer::SiteFooter;
pub(crate) use site_header::SiteHeader;
