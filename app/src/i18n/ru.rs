pub(super) const ENTRIES: &[(&str, &str, &str)] = &[
    ("common", "loading", "Загрузка..."),
    ("common", "save", "Сохранить"),
    ("common", "success", "Готово"),
    ("common", "confirm", "Подтвердить"),
    ("common", "cancel", "Отмена"),
    ("common", "username", "Имя пользователя"),
    ("common", "email", "Email"),
    ("common", "selectLanguage", "Выбрать язык"),
    ("common", "notFound", "Страница не найдена"),
    ("common", "back", "Назад"),
    ("nav", "home", "Главная"),
    ("nav", "settings", "Настройки"),
    ("nav", "faq", "FAQ"),
    ("nav", "artistPage", "Страница артиста"),
    ("nav", "mainSite", "Перейти на mus.link"),
    ("nav", "welcome", "Все ссылки на вашу музыку на одной странице"),
    ("theme", "switchToLight", "Включить светлую тему"),
    ("theme", "switchToDark", "Включить тёмную тему"),
    ("auth", "usernameRequired", "Введите имя пользователя"),
    ("auth", "emailRequired", "Введите email"),
    ("auth", "passwordRequired", "Введите пароль"),
    ("auth", "passwordMinLength", "Пароль должен быть не короче 6 символов"),
    ("errors", "validationError", "Проверьте введённые данные"),
    ("errors", "saveFailed", "Не удалось сохранить"),
    ("errors", "deleteFailed", "Не удалось удалить"),
    ("errors", "loadFailed", "Не удалось загрузить аналитику"),
    ("settings", "title", "Настройки"),
    ("settings", "profile", "Профиль"),
    ("settings", "security", "Безопасность"),
    ("settings", "changeEmail", "Измените имя пользователя и email"),
    ("settings", "changePassword", "Сменить пароль"),
    ("settings", "currentPassword", "Текущий пароль"),
    ("settings", "newPassword", "Новый пароль"),
    ("settings", "confirmNewPassword", "Повторите новый пароль"),
    ("settings", "deleteAccount", "Удалить аккаунт"),
    (
        "settings",
        "deleteAccountWarning",
        "Аккаунт и все страницы будут удалены безвозвратно.",
    ),
    ("settings", "deleteConfirmPrompt", "Для подтверждения введите {word}"),
    ("settings", "settingsSaved", "Настройки сохранены"),
    ("settings", "publicPage", "Ваша публичная страница"),
    ("settings", "signInRequired", "Войдите, чтобы управлять настройками"),
    ("analytics", "title", "Статистика страницы"),
    ("analytics", "views", "Просмотры страниц"),
    ("analytics", "totalClicks", "Всего кликов"),
    ("analytics", "clickRate", "Коэффициент кликов"),
    ("analytics", "byPlatform", "Клики по платформам"),
    (
        "analytics",
        "noPlatformData",
        "Данные по платформе пока отсутствуют. Добавьте ссылки на свою страницу, чтобы начать отслеживание.",
    ),
    ("analytics", "notFound", "Аналитика не найдена"),
    ("analytics", "geography", "География"),
    ("analytics", "byCountry", "Топ стран"),
    ("analytics", "byCity", "Топ городов"),
    ("analytics", "noGeoData", "Данных о местоположении пока нет"),
    ("analytics", "platformShare", "Доля платформ"),
    ("analytics", "lockedTitle", "Расширенная аналитика"),
    (
        "analytics",
        "lockedText",
        "Узнайте, где находятся ваши слушатели и какие платформы они предпочитают.",
    ),
    ("analytics", "upgrade", "Улучшить тариф"),
    ("faq", "title", "FAQ"),
    ("faq", "subtitle", "Часто задаваемые вопросы"),
    ("faq", "contactTitle", "Не нашли ответ на свой вопрос?"),
    ("faq", "contactText", "Напишите нам на"),
];
