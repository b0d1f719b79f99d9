//! 公曆及農曆節日
//!
//! 農曆節日只落在平月，閏月不重過節。除夕為臘月最末日，無論該月大小。

use crate::date::Date;

use super::{LunarYear, Month};

const SOLAR: &[((i32, i32), &str)] = &[
    ((1, 1), "元旦"),
    ((2, 14), "情人節"),
    ((3, 8), "婦女節"),
    ((3, 12), "植樹節"),
    ((5, 1), "勞動節"),
    ((5, 4), "青年節"),
    ((6, 1), "兒童節"),
    ((7, 1), "建黨節"),
    ((8, 1), "建軍節"),
    ((9, 10), "教師節"),
    ((10, 1), "國慶節"),
    ((12, 25), "聖誕節"),
];

const LUNAR: &[((u32, u32), &str)] = &[
    ((1, 1), "春節"),
    ((1, 15), "元宵節"),
    ((2, 2), "龍抬頭"),
    ((5, 5), "端午節"),
    ((7, 7), "七夕"),
    ((7, 15), "中元節"),
    ((8, 15), "中秋節"),
    ((9, 9), "重陽節"),
    ((12, 8), "臘八節"),
    ((12, 23), "小年"),
];

/// 公曆節日
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::festival;
///
/// assert_eq!(Some("國慶節"), festival::solar(10, 1));
/// assert_eq!(None, festival::solar(10, 2));
/// ```
pub fn solar(month: i32, day: i32) -> Option<&'static str> {
    SOLAR
        .iter()
        .find(|&&(md, _)| md == (month, day))
        .map(|&(_, name)| name)
}

/// 農曆節日（不含除夕，除夕須知該月大小，見 [`for_date`]）
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::{festival, Month::*};
///
/// assert_eq!(Some("中秋節"), festival::lunar(Common(8), 15));
/// assert_eq!(None, festival::lunar(Leap(8), 15));
/// ```
pub fn lunar(month: Month, day: u32) -> Option<&'static str> {
    let Month::Common(num) = month else {
        return None;
    };
    LUNAR
        .iter()
        .find(|&&(md, _)| md == (num, day))
        .map(|&(_, name)| name)
}

/// 取得給定日期的全部節日，先公曆後農曆。
///
/// `year` 須為 `date` 所在農曆年，否則只給出公曆節日。
///
/// # 用例
///
/// ```
/// use lunisolar::Date;
/// use lunisolar::chinese::{festival, LunarYear};
///
/// let date = Date::from_gregorian(2024, 2, 9).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
/// assert_eq!(vec!["除夕"], festival::for_date(date, &year));
/// ```
pub fn for_date(date: Date, year: &LunarYear) -> Vec<&'static str> {
    let (_, m, d) = date.gregorian();
    let mut names: Vec<_> = solar(m, d).into_iter().collect();
    if let Ok((_, month, day)) = year.ymd_for(date) {
        names.extend(lunar(month, day));
        if date + 1 == year.end() {
            names.push("除夕");
        }
    }
    names
}
