//! FAQ content and the single-open accordion state.

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqCategory {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [FaqItem],
}

const RU: &[FaqCategory] = &[
    FaqCategory {
        title: "Общие вопросы",
        subtitle: "Для новичков",
        items: &[
            FaqItem {
                question: "Что такое mus.link?",
                answer: "Это инструмент для артистов, который объединяет все ссылки на стриминговые платформы (Spotify, Apple Music, VK Музыка и др.) на одной красивой странице.",
            },
            FaqItem {
                question: "Это бесплатно?",
                answer: "Основной функционал создания страниц доступен бесплатно.",
            },
        ],
    },
    FaqCategory {
        title: "Технические вопросы",
        subtitle: "Процесс",
        items: &[
            FaqItem {
                question: "Как добавить свой трек?",
                answer: "Просто вставьте ссылку на ваш релиз из любого стриминга (например, Spotify или Apple Music) в поле поиска, и наш сервис автоматически подтянет ссылки на другие площадки.",
            },
            FaqItem {
                question: "Могу ли я изменить оформление?",
                answer: "Да, вы можете загрузить свою обложку и настроить порядок отображения кнопок платформ.",
            },
            FaqItem {
                question: "Что такое \"Вид ссылки\"?",
                answer: "Это уникальное имя вашей страницы в адресной строке. Например: mus.link/mysong, слово mysong — это и есть вид ссылки.",
            },
        ],
    },
    FaqCategory {
        title: "Аналитика и продвижение",
        subtitle: "Статистика",
        items: &[
            FaqItem {
                question: "Где я могу увидеть количество просмотров?",
                answer: "Статистика просмотров отображается в вашем личном кабинете во вкладке Аналитика.",
            },
            FaqItem {
                question: "Зачем нужен QR-код?",
                answer: "Мы автоматически создаем QR-код для каждой страницы. Вы можете скачать его и разместить на афишах или в соцсетях, чтобы фанаты могли перейти к прослушиванию за одно сканирование.",
            },
        ],
    },
    FaqCategory {
        title: "Решение проблем",
        subtitle: "Помощь",
        items: &[
            FaqItem {
                question: "Сервис не нашел мой трек автоматически, что делать?",
                answer: "Если автопоиск не сработал (например, если релиз только что вышел), вы можете добавить ссылки на площадки вручную в редакторе страницы.",
            },
            FaqItem {
                question: "Как удалить страницу?",
                answer: "В личном кабинете нажмите на иконку корзины рядом с нужным релизом. Внимание: это действие необратимо.",
            },
        ],
    },
];

const EN: &[FaqCategory] = &[
    FaqCategory {
        title: "General",
        subtitle: "Getting started",
        items: &[
            FaqItem {
                question: "What is mus.link?",
                answer: "A tool for artists that gathers links to every streaming platform (Spotify, Apple Music, VK Music and more) on one clean page.",
            },
            FaqItem {
                question: "Is it free?",
                answer: "Creating pages is free. Some advanced features need a paid plan.",
            },
        ],
    },
    FaqCategory {
        title: "How it works",
        subtitle: "Process",
        items: &[
            FaqItem {
                question: "How do I add my track?",
                answer: "Paste a link to your release from any streaming service (for example Spotify or Apple Music) into the search field and we find the links for the other platforms automatically.",
            },
            FaqItem {
                question: "Can I change the design?",
                answer: "Yes. You can upload your own cover and reorder the platform buttons.",
            },
            FaqItem {
                question: "What is the \"link slug\"?",
                answer: "The unique name of your page in the address bar. In mus.link/mysong the slug is mysong.",
            },
        ],
    },
    FaqCategory {
        title: "Analytics and promotion",
        subtitle: "Statistics",
        items: &[
            FaqItem {
                question: "Where can I see my view counts?",
                answer: "View statistics are in your dashboard under Analytics.",
            },
            FaqItem {
                question: "What is the QR code for?",
                answer: "Every page gets a QR code. Download it for posters or social media so fans can start listening with one scan.",
            },
        ],
    },
    FaqCategory {
        title: "Troubleshooting",
        subtitle: "Help",
        items: &[
            FaqItem {
                question: "My track was not found automatically. What now?",
                answer: "If auto-search misses it (for example, a release that just came out), add the platform links by hand in the page editor.",
            },
            FaqItem {
                question: "How do I delete a page?",
                answer: "In your dashboard, click the trash icon next to the release. This cannot be undone.",
            },
        ],
    },
];

/// Spanish has no FAQ of its own yet and reads the English one.
pub fn categories(locale: Locale) -> &'static [FaqCategory] {
    match locale {
        Locale::Ru => RU,
        Locale::En | Locale::Es => EN,
    }
}

/// (category, item) index of an accordion entry.
pub type ItemId = (usize, usize);

/// At most one open item per accordion; clicking the open item closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<ItemId>,
}

impl AccordionState {
    pub fn is_open(&self, id: ItemId) -> bool {
        self.open == Some(id)
    }

    pub fn toggle(self, id: ItemId) -> Self {
        Self {
            open: if self.is_open(id) { None } else { Some(id) },
        }
    }
}
