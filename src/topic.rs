//! Topic selection for generated articles.

use rand::Rng;

const TRENDS: [&str; 15] = [
    "Multimodal AI интеграция текста изображений и аудио в единых моделях",
    "AI агенты автономные системы способные выполнять сложные задачи",
    "Квантовые вычисления и машинное обучение прорыв в производительности",
    "Нейроморфные вычисления энергоэффективные архитектуры нейросетей",
    "Generative AI создание контента кода и дизайнов искусственным интеллектом",
    "Edge AI обработка данных на устройстве без облачной зависимости",
    "AI для кибербезопасности предиктивная защита от угроз",
    "Этичный AI ответственное развитие и использование искусственного интеллекта",
    "AI в healthcare диагностика разработка лекарств и персонализированная медицина",
    "Автономные системы беспилотный транспорт и робототехника",
    "AI оптимизация сжатие моделей и ускорение inference",
    "Доверенный AI объяснимые и прозрачные алгоритмы",
    "AI для климата оптимизация энергопотребления и экологические решения",
    "Персональные AI ассистенты индивидуализированные цифровые помощники",
    "AI в образовании адаптивное обучение и персонализированные учебные планы",
];

const DOMAINS: [&str; 10] = [
    "в веб разработке и cloud native приложениях",
    "в мобильных приложениях и IoT экосистемах",
    "в облачных сервисах и распределенных системах",
    "в анализе больших данных и бизнес аналитике",
    "в компьютерной безопасности и киберзащите",
    "в медицинской диагностике и биотехнологиях",
    "в финансовых технологиях и финтехе",
    "в автономных транспортных системах",
    "в smart city и умной инфраструктуре",
    "в образовательных технологиях и EdTech",
];

const FORMAT_COUNT: usize = 7;

fn compose(trend: &str, domain: &str, variant: usize) -> String {
    match variant {
        0 => format!("{trend} {domain} в 2025 году"),
        1 => format!("Тенденции 2025 {trend} {domain}"),
        2 => format!("{trend} революционные изменения {domain} в 2025"),
        3 => format!("Как {trend} трансформирует {domain} в 2025 году"),
        4 => format!("Инновации 2025 {trend} для {domain}"),
        5 => format!("{trend} будущее {domain} в 2025 году"),
        _ => format!("Практическое применение {trend} в {domain} 2025"),
    }
}

/// Pick a random AI trend topic.
pub fn random_topic<R: Rng + ?Sized>(rng: &mut R) -> String {
    let trend = TRENDS[rng.random_range(0..TRENDS.len())];
    let domain = DOMAINS[rng.random_range(0..DOMAINS.len())];
    compose(trend, domain, rng.random_range(0..FORMAT_COUNT))
}
