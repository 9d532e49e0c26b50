//! Display language for reporters and CLI output
//!
//! The assessment itself is language-neutral. A [`Messages`] value is built
//! from an explicit [`Locale`] and handed to whatever renders text.

use crate::level::{Finding, TimeToNextLevel};
use crate::{Category, Level, Priority, Severity};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
    Ua,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Ua];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Ua => "ua",
        }
    }

    /// Name of the language in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Русский",
            Locale::Ua => "Українська",
        }
    }

    /// Parse a language code, falling back to English with a warning
    pub fn parse_or_default(code: &str) -> Locale {
        code.parse().unwrap_or_else(|e: String| {
            tracing::warn!("{}; using English", e);
            Locale::En
        })
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            "ua" | "uk" => Ok(Locale::Ua),
            other => Err(format!("language '{}' is not supported", other)),
        }
    }
}

/// Fixed UI strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    ReportTitle,
    OverallScore,
    DeveloperLevel,
    CategoriesBreakdown,
    TopIssues,
    Recommendations,
    Summary,
    FileAnalysis,
    NoIssuesFound,
    DetailedAnalysis,
    Strengths,
    Weaknesses,
    NextSteps,
    TimeToNextLevel,
    PracticeScore,
    ComplexityScore,
    CategoryDetails,
    File,
    Rule,
    Score,
    Issues,
    Suggestions,
    Examples,
    Framework,
    OutputFormat,
    TargetLevel,
    AssessmentStarting,
    AssessmentCompleted,
    ReportGenerated,
    ConfigCreated,
    ConfigExists,
    AvailableRules,
    LevelCriteria,
    SupportedLanguages,
    ThresholdNotMet,
}

/// Localized strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn english() -> Self {
        Self::new(Locale::En)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn pick(&self, [en, ru, ua]: [&'static str; 3]) -> &'static str {
        match self.locale {
            Locale::En => en,
            Locale::Ru => ru,
            Locale::Ua => ua,
        }
    }

    pub fn text(&self, text: Text) -> &'static str {
        self.pick(match text {
            Text::ReportTitle => [
                "Frontend Code Assessment Report",
                "Отчёт об оценке фронтенд-кода",
                "Звіт про оцінку фронтенд-коду",
            ],
            Text::OverallScore => ["Overall score", "Общая оценка", "Загальна оцінка"],
            Text::DeveloperLevel => ["Developer level", "Уровень разработчика", "Рівень розробника"],
            Text::CategoriesBreakdown => [
                "Category breakdown",
                "Оценка по категориям",
                "Оцінка за категоріями",
            ],
            Text::TopIssues => ["Top issues", "Основные проблемы", "Основні проблеми"],
            Text::Recommendations => ["Recommendations", "Рекомендации", "Рекомендації"],
            Text::Summary => ["Summary", "Итог", "Підсумок"],
            Text::FileAnalysis => ["File analysis", "Анализ файлов", "Аналіз файлів"],
            Text::NoIssuesFound => ["No issues found", "Проблем не найдено", "Проблем не знайдено"],
            Text::DetailedAnalysis => [
                "Detailed level analysis",
                "Подробный анализ уровня",
                "Детальний аналіз рівня",
            ],
            Text::Strengths => ["Strengths", "Сильные стороны", "Сильні сторони"],
            Text::Weaknesses => ["Weaknesses", "Слабые стороны", "Слабкі сторони"],
            Text::NextSteps => ["Next steps", "Следующие шаги", "Наступні кроки"],
            Text::TimeToNextLevel => [
                "Estimated time to next level",
                "Ожидаемое время до следующего уровня",
                "Орієнтовний час до наступного рівня",
            ],
            Text::PracticeScore => ["Practice score", "Оценка практик", "Оцінка практик"],
            Text::ComplexityScore => ["Complexity score", "Оценка сложности", "Оцінка складності"],
            Text::CategoryDetails => ["Category details", "Детали по категориям", "Деталі за категоріями"],
            Text::File => ["File", "Файл", "Файл"],
            Text::Rule => ["Rule", "Правило", "Правило"],
            Text::Score => ["Score", "Оценка", "Оцінка"],
            Text::Issues => ["Issues", "Проблемы", "Проблеми"],
            Text::Suggestions => ["Suggestions", "Предложения", "Пропозиції"],
            Text::Examples => ["Examples", "Примеры", "Приклади"],
            Text::Framework => ["Framework", "Фреймворк", "Фреймворк"],
            Text::OutputFormat => ["Output format", "Формат вывода", "Формат виводу"],
            Text::TargetLevel => ["Target level", "Целевой уровень", "Цільовий рівень"],
            Text::AssessmentStarting => [
                "Starting assessment...",
                "Начинаем оценку...",
                "Починаємо оцінку...",
            ],
            Text::AssessmentCompleted => [
                "Assessment completed",
                "Оценка завершена",
                "Оцінку завершено",
            ],
            Text::ReportGenerated => ["Report written to", "Отчёт сохранён в", "Звіт збережено в"],
            Text::ConfigCreated => [
                "Configuration file created",
                "Файл конфигурации создан",
                "Файл конфігурації створено",
            ],
            Text::ConfigExists => [
                "Configuration file already exists",
                "Файл конфигурации уже существует",
                "Файл конфігурації вже існує",
            ],
            Text::AvailableRules => ["Available rules", "Доступные правила", "Доступні правила"],
            Text::LevelCriteria => [
                "Level criteria",
                "Критерии уровней",
                "Критерії рівнів",
            ],
            Text::SupportedLanguages => [
                "Supported languages",
                "Поддерживаемые языки",
                "Підтримувані мови",
            ],
            Text::ThresholdNotMet => [
                "Overall score is below the threshold",
                "Общая оценка ниже порога",
                "Загальна оцінка нижча за поріг",
            ],
        })
    }

    pub fn category(&self, category: Category) -> &'static str {
        self.pick(match category {
            Category::CodeQuality => ["Code Quality", "Качество кода", "Якість коду"],
            Category::Performance => ["Performance", "Производительность", "Продуктивність"],
            Category::Architecture => ["Architecture", "Архитектура", "Архітектура"],
            Category::BestPractices => ["Best Practices", "Лучшие практики", "Найкращі практики"],
            Category::Maintainability => ["Maintainability", "Поддерживаемость", "Підтримуваність"],
        })
    }

    pub fn level_name(&self, level: Level) -> &'static str {
        self.pick(match level {
            Level::Junior => ["Junior", "Junior", "Junior"],
            Level::Middle => ["Middle", "Middle", "Middle"],
            Level::Senior => ["Senior", "Senior", "Senior"],
        })
    }

    pub fn level_description(&self, level: Level) -> &'static str {
        self.pick(match level {
            Level::Junior => [
                "Beginner developer with basic skills",
                "Начинающий разработчик с базовыми навыками",
                "Початківець із базовими навичками",
            ],
            Level::Middle => [
                "Experienced developer who works independently",
                "Опытный разработчик, работающий самостоятельно",
                "Досвідчений розробник, що працює самостійно",
            ],
            Level::Senior => [
                "Expert developer with deep knowledge of architecture and practices",
                "Эксперт с глубоким знанием архитектуры и практик",
                "Експерт із глибоким знанням архітектури та практик",
            ],
        })
    }

    pub fn level_criteria(&self, level: Level) -> [&'static str; 3] {
        match level {
            Level::Junior => [
                self.pick(["Basic syntax", "Базовый синтаксис", "Базовий синтаксис"]),
                self.pick(["Simple functions", "Простые функции", "Прості функції"]),
                self.pick([
                    "Basic error handling",
                    "Базовая обработка ошибок",
                    "Базова обробка помилок",
                ]),
            ],
            Level::Middle => [
                self.pick([
                    "Asynchronous programming",
                    "Асинхронное программирование",
                    "Асинхронне програмування",
                ]),
                self.pick(["Testing", "Тестирование", "Тестування"]),
                self.pick(["Code organization", "Организация кода", "Організація коду"]),
            ],
            Level::Senior => [
                self.pick(["Design patterns", "Паттерны проектирования", "Патерни проєктування"]),
                self.pick([
                    "Performance optimization",
                    "Оптимизация производительности",
                    "Оптимізація продуктивності",
                ]),
                self.pick([
                    "Security and documentation",
                    "Безопасность и документация",
                    "Безпека та документація",
                ]),
            ],
        }
    }

    pub fn severity(&self, severity: Severity) -> &'static str {
        self.pick(match severity {
            Severity::Error => ["error", "ошибка", "помилка"],
            Severity::Warning => ["warning", "предупреждение", "попередження"],
            Severity::Info => ["info", "инфо", "інфо"],
        })
    }

    pub fn priority(&self, priority: Priority) -> &'static str {
        self.pick(match priority {
            Priority::High => ["high", "высокий", "високий"],
            Priority::Medium => ["medium", "средний", "середній"],
        })
    }

    pub fn time_band(&self, band: TimeToNextLevel) -> &'static str {
        self.pick(match band {
            TimeToNextLevel::OneToTwoMonths => ["1-2 months", "1-2 месяца", "1-2 місяці"],
            TimeToNextLevel::ThreeToSixMonths => ["3-6 months", "3-6 месяцев", "3-6 місяців"],
            TimeToNextLevel::SixToTwelveMonths => ["6-12 months", "6-12 месяцев", "6-12 місяців"],
            TimeToNextLevel::OneToTwoYears => ["1-2 years", "1-2 года", "1-2 роки"],
            TimeToNextLevel::MaxLevelReached => [
                "Maximum level reached",
                "Достигнут максимальный уровень",
                "Досягнуто максимального рівня",
            ],
        })
    }

    /// Render a strength (`strong`) or weakness entry
    pub fn finding(&self, finding: Finding, strong: bool) -> String {
        match (finding, strong) {
            (Finding::Category(c), true) => format!(
                "{} {}",
                self.pick(["Strong results in", "Отличные навыки в категории", "Відмінні навички в категорії"]),
                self.category(c)
            ),
            (Finding::Category(c), false) => format!(
                "{}: {}",
                self.pick(["Needs improvement", "Требует улучшения", "Потребує покращення"]),
                self.category(c)
            ),
            (Finding::ModernPractices, true) => self
                .pick([
                    "Good command of modern development practices",
                    "Хорошее знание современных практик разработки",
                    "Добре знання сучасних практик розробки",
                ])
                .to_string(),
            (Finding::ModernPractices, false) => self
                .pick([
                    "Modern development practices are underused",
                    "Недостаточное использование современных практик",
                    "Недостатнє використання сучасних практик",
                ])
                .to_string(),
        }
    }
}
