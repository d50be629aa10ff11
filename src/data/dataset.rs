use chrono::NaiveDate;

use crate::data::model::{CaseRecord, CaseStatus, PartyKind, Registry};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal dates are valid")
}

fn record(
    id: u32,
    name: &str,
    tax_id: &str,
    kind: PartyKind,
    status: CaseStatus,
    debt_amount: u64,
    case_number: &str,
    start_date: NaiveDate,
    region: &str,
    administrator: &str,
) -> CaseRecord {
    CaseRecord {
        id,
        name: name.to_string(),
        tax_id: tax_id.to_string(),
        kind,
        status,
        debt_amount,
        case_number: case_number.to_string(),
        start_date,
        region: region.to_string(),
        administrator: administrator.to_string(),
    }
}

/// The registry shipped with the application.
///
/// Record order is the publication order of the federal resource snapshot;
/// the table and the export both preserve it.
pub fn bundled_registry() -> Registry {
    Registry::new(vec![
        record(
            1,
            "ООО \"Строительная Компания Монолит\"",
            "7728123456",
            PartyKind::Legal,
            CaseStatus::Active,
            45_000_000,
            "А40-12345/2024",
            date(2024, 3, 15),
            "Москва",
            "Иванов Иван Иванович",
        ),
        record(
            2,
            "Петров Алексей Сергеевич",
            "772812345678",
            PartyKind::Individual,
            CaseStatus::Active,
            3_500_000,
            "А40-23456/2024",
            date(2024, 5, 20),
            "Московская область",
            "Смирнова Елена Петровна",
        ),
        record(
            3,
            "АО \"Торговый Дом Альфа\"",
            "7728234567",
            PartyKind::Legal,
            CaseStatus::Completed,
            128_000_000,
            "А40-34567/2023",
            date(2023, 11, 10),
            "Москва",
            "Кузнецов Петр Владимирович",
        ),
        record(
            4,
            "Сидорова Мария Ивановна",
            "772823456789",
            PartyKind::Individual,
            CaseStatus::Suspended,
            1_200_000,
            "А40-45678/2024",
            date(2024, 2, 5),
            "Санкт-Петербург",
            "Волков Дмитрий Александрович",
        ),
        record(
            5,
            "ООО \"Производственное предприятие Прогресс\"",
            "7728345678",
            PartyKind::Legal,
            CaseStatus::Active,
            89_000_000,
            "А40-56789/2024",
            date(2024, 6, 12),
            "Казань",
            "Николаев Сергей Игоревич",
        ),
        record(
            6,
            "Морозов Владимир Петрович",
            "772834567890",
            PartyKind::Individual,
            CaseStatus::Active,
            5_600_000,
            "А40-67890/2024",
            date(2024, 7, 25),
            "Екатеринбург",
            "Федорова Анна Викторовна",
        ),
        record(
            7,
            "ЗАО \"Логистическая Компания Вектор\"",
            "7728456789",
            PartyKind::Legal,
            CaseStatus::Completed,
            67_000_000,
            "А40-78901/2023",
            date(2023, 9, 18),
            "Новосибирск",
            "Соколов Андрей Михайлович",
        ),
        record(
            8,
            "Лебедева Екатерина Алексеевна",
            "772845678901",
            PartyKind::Individual,
            CaseStatus::Active,
            2_800_000,
            "А40-89012/2024",
            date(2024, 4, 30),
            "Москва",
            "Попов Игорь Юрьевич",
        ),
    ])
}
