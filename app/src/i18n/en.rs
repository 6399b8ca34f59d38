pub(super) const ENTRIES: &[(&str, &str, &str)] = &[
    ("common", "loading", "Loading..."),
    ("common", "save", "Save"),
    ("common", "success", "Done"),
    ("common", "confirm", "Confirm"),
    ("common", "cancel", "Cancel"),
    ("common", "username", "Username"),
    ("common", "email", "Email"),
    ("common", "selectLanguage", "Select language"),
    ("common", "notFound", "Page not found"),
    ("common", "back", "Back"),
    ("nav", "home", "Home"),
    ("nav", "settings", "Settings"),
    ("nav", "faq", "FAQ"),
    ("nav", "artistPage", "Artist page"),
    ("nav", "mainSite", "Go to mus.link"),
    ("nav", "welcome", "All your music links on one page"),
    ("theme", "switchToLight", "Switch to light mode"),
    ("theme", "switchToDark", "Switch to dark mode"),
    ("auth", "usernameRequired", "Username is required"),
    ("auth", "emailRequired", "Email is required"),
    ("auth", "passwordRequired", "Password is required"),
    ("auth", "passwordMinLength", "Password must be at least 6 characters"),
    ("errors", "validationError", "Please check the entered data"),
    ("errors", "saveFailed", "Failed to save"),
    ("errors", "deleteFailed", "Failed to delete"),
    ("errors", "loadFailed", "Failed to load analytics"),
    ("settings", "title", "Settings"),
    ("settings", "profile", "Profile"),
    ("settings", "security", "Security"),
    ("settings", "changeEmail", "Change your username and email"),
    ("settings", "changePassword", "Change password"),
    ("settings", "currentPassword", "Current password"),
    ("settings", "newPassword", "New password"),
    ("settings", "confirmNewPassword", "Confirm new password"),
    ("settings", "deleteAccount", "Delete account"),
    (
        "settings",
        "deleteAccountWarning",
        "This permanently deletes your account and all pages.",
    ),
    ("settings", "deleteConfirmPrompt", "Type {word} to confirm"),
    ("settings", "settingsSaved", "Settings saved"),
    ("settings", "publicPage", "Your public page"),
    ("settings", "signInRequired", "Sign in to manage your settings"),
    ("analytics", "title", "Page statistics"),
    ("analytics", "views", "Page views"),
    ("analytics", "totalClicks", "Total clicks"),
    ("analytics", "clickRate", "Click-through rate"),
    ("analytics", "byPlatform", "Clicks by platform"),
    (
        "analytics",
        "noPlatformData",
        "No platform data yet. Add links to your page to start tracking.",
    ),
    ("analytics", "notFound", "Analytics not found"),
    ("analytics", "geography", "Geography"),
    ("analytics", "byCountry", "Top countries"),
    ("analytics", "byCity", "Top cities"),
    ("analytics", "noGeoData", "No location data yet"),
    ("analytics", "platformShare", "Platform share"),
    ("analytics", "lockedTitle", "Advanced analytics"),
    (
        "analytics",
        "lockedText",
        "See where your listeners are and which platforms they prefer.",
    ),
    ("analytics", "upgrade", "Upgrade plan"),
    ("faq", "title", "FAQ"),
    ("faq", "subtitle", "Frequently asked questions"),
    ("faq", "contactTitle", "Didn't find an answer?"),
    ("faq", "contactText", "Write to us at"),
];
