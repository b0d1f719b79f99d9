//! 日期各部分的中文名稱

use super::Month;

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 天干，以干支序號除十的餘數為索引（餘 0 為「癸」）。
const STEMS: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
/// 地支，以干支序號除十二的餘數為索引（餘 0 為「亥」）。
const BRANCHES: &[&str] = &[
    "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
];
/// 生肖，與 [`BRANCHES`] 同索引
const ANIMALS: &[&str] = &[
    "豬", "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗",
];

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    STEMS[(num % 10) as usize].to_owned() + BRANCHES[(num % 12) as usize]
}

/// 干支序號對應的生肖。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::{self, sexagenary_for_year};
///
/// assert_eq!("龍", chinese::fmt::zodiac(sexagenary_for_year(2024)));
/// ```
pub fn zodiac(num: u32) -> &'static str {
    ANIMALS[(num % 12) as usize]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("閏正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month) -> String {
    let num = m.num();
    let name = match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => panic!("month {} not in 1..=12", num),
    };
    format!("{}{}月", if m.is_leap() { "閏" } else { "" }, name)
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    let tens = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    };
    tens.to_owned() + NUM_CHINESE[(d % 10) as usize]
}

/// 以「干支年月日」形式寫出農曆日期。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::{self, Month::*};
///
/// assert_eq!("甲辰年正月初一", chinese::fmt::lunar_date(2024, Common(1), 1));
/// assert_eq!("丁酉年閏六月初一", chinese::fmt::lunar_date(2017, Leap(6), 1));
/// ```
pub fn lunar_date(year: i32, m: Month, d: u32) -> String {
    format!(
        "{}年{}{}",
        sexagenary(super::sexagenary_for_year(year)),
        month(m),
        day(d)
    )
}

/// 節氣序號轉為名稱。`1..=24` 分別為立春到大寒。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese;
///
/// assert_eq!("穀雨", chinese::fmt::solar_term(6));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至",
        "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
        "冬至", "小寒",
    ];
    NAMES[(term % 24) as usize]
}

/// 公曆月日所屬的黃道星座。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese;
///
/// assert_eq!("水瓶座", chinese::fmt::constellation(2, 10));
/// assert_eq!("摩羯座", chinese::fmt::constellation(12, 25));
/// ```
///
/// # Panics
///
/// 若月份不在 `1..=12` 間則 panic。
pub fn constellation(month: i32, day: i32) -> &'static str {
    const NAMES: &[&str] = &[
        "摩羯座", "水瓶座", "雙魚座", "白羊座", "金牛座", "雙子座", "巨蟹座", "獅子座",
        "處女座", "天秤座", "天蠍座", "射手座",
    ];
    // 各月中換入下一星座的日子
    const CUSPS: [i32; 12] = [20, 19, 21, 20, 21, 22, 23, 23, 23, 24, 23, 22];
    assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
    let idx = month as usize - 1 + (day >= CUSPS[month as usize - 1]) as usize;
    NAMES[idx % 12]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_zodiac() {
        for (std, num) in [("鼠", 1), ("牛", 2), ("豬", 60), ("龍", 41)] {
            assert_eq!(std, zodiac(num));
        }
    }

    #[test]
    fn test_month() {
        use Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("五月", Common(5)),
            ("十月", Common(10)),
            ("臘月", Common(12)),
            ("閏冬月", Leap(11)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_constellation() {
        for (std, (m, d)) in [
            ("摩羯座", (1, 19)),
            ("水瓶座", (1, 20)),
            ("雙魚座", (2, 19)),
            ("白羊座", (3, 21)),
            ("雙子座", (6, 21)),
            ("巨蟹座", (6, 22)),
            ("天蠍座", (10, 24)),
            ("射手座", (12, 21)),
            ("摩羯座", (12, 22)),
        ] {
            assert_eq!(std, constellation(m, d), "{m}-{d}");
        }
    }

    #[test]
    #[should_panic]
    fn month_out_of_range() {
        month(Month::Common(13));
    }
}
