pub(super) const ENTRIES: &[(&str, &str, &str)] = &[
    ("common", "loading", "Cargando..."),
    ("common", "save", "Guardar"),
    ("common", "success", "Listo"),
    ("common", "confirm", "Confirmar"),
    ("common", "cancel", "Cancelar"),
    ("common", "username", "Nombre de usuario"),
    ("common", "email", "Correo electrónico"),
    ("common", "selectLanguage", "Seleccionar idioma"),
    ("common", "notFound", "Página no encontrada"),
    ("common", "back", "Volver"),
    ("nav", "home", "Inicio"),
    ("nav", "settings", "Configuración"),
    ("nav", "faq", "Preguntas frecuentes"),
    ("nav", "artistPage", "Página del artista"),
    ("nav", "mainSite", "Ir a mus.link"),
    ("nav", "welcome", "Todos los enlaces de tu música en una página"),
    ("theme", "switchToLight", "Cambiar a modo claro"),
    ("theme", "switchToDark", "Cambiar a modo oscuro"),
    ("auth", "usernameRequired", "El nombre de usuario es obligatorio"),
    ("auth", "emailRequired", "El correo electrónico es obligatorio"),
    ("auth", "passwordRequired", "La contraseña es obligatoria"),
    ("auth", "passwordMinLength", "La contraseña debe tener al menos 6 caracteres"),
    ("errors", "validationError", "Revisa los datos introducidos"),
    ("errors", "saveFailed", "No se pudo guardar"),
    ("errors", "deleteFailed", "No se pudo eliminar"),
    ("errors", "loadFailed", "No se pudieron cargar las estadísticas"),
    ("settings", "title", "Configuración"),
    ("settings", "profile", "Perfil"),
    ("settings", "security", "Seguridad"),
    ("settings", "changeEmail", "Cambia tu nombre de usuario y correo"),
    ("settings", "changePassword", "Cambiar contraseña"),
    ("settings", "currentPassword", "Contraseña actual"),
    ("settings", "newPassword", "Nueva contraseña"),
    ("settings", "confirmNewPassword", "Confirmar nueva contraseña"),
    ("settings", "deleteAccount", "Eliminar cuenta"),
    (
        "settings",
        "deleteAccountWarning",
        "Esto elimina tu cuenta y todas tus páginas de forma permanente.",
    ),
    ("settings", "deleteConfirmPrompt", "Escribe {word} para confirmar"),
    ("settings", "settingsSaved", "Configuración guardada"),
    ("settings", "publicPage", "Tu página pública"),
    ("settings", "signInRequired", "Inicia sesión para gestionar tu configuración"),
    ("analytics", "title", "Estadísticas de la página"),
    ("analytics", "views", "Visitas"),
    ("analytics", "totalClicks", "Clics totales"),
    ("analytics", "clickRate", "Tasa de clics"),
    ("analytics", "byPlatform", "Clics por plataforma"),
    (
        "analytics",
        "noPlatformData",
        "Aún no hay datos por plataforma. Añade enlaces a tu página para empezar.",
    ),
    ("analytics", "notFound", "Estadísticas no encontradas"),
    ("analytics", "geography", "Geografía"),
    ("analytics", "byCountry", "Principales países"),
    ("analytics", "byCity", "Principales ciudades"),
    ("analytics", "noGeoData", "Aún no hay datos de ubicación"),
    ("analytics", "platformShare", "Cuota por plataforma"),
    ("analytics", "lockedTitle", "Estadísticas avanzadas"),
    (
        "analytics",
        "lockedText",
        "Descubre dónde están tus oyentes y qué plataformas prefieren.",
    ),
    ("analytics", "upgrade", "Mejorar plan"),
    ("faq", "title", "Preguntas frecuentes"),
    ("faq", "subtitle", "Dudas habituales"),
    ("faq", "contactTitle", "¿No encontraste la respuesta?"),
    ("faq", "contactText", "Escríbenos a"),
];
