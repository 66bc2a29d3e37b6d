//! Compiled-in site content.

use super::domain::{
    Board, CategoryFilter, GradeSchedule, GradeSeminar, Location, Post, ScheduleItem,
    SeminarItem, SeminarStatus, TeacherItem,
};

const FEE_TABLE_IMAGE: &str = "https://i.imgur.com/8aJgEof.png";
const TIMETABLE_IMAGE: &str = "https://i.imgur.com/B7ODxLS.png";
const PORTRAIT_IMAGE: &str = "https://i.imgur.com/L7R1aWk.png";
const INTRO_VIDEO: &str = "yq0G26vIu3Q";
// Placeholder embed shared by every branch until real map links are issued.
const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3164.717904856644!2d127.0543669766946!3d37.514781472044815!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x357ca3837c35a837%3A0xe54c1b97b0a3b2b!2z7ZSM7J2Y7ZiE6rSA!5e0!3m2!1sko!2skr!4v1700000000000!5m2!1sko!2skr";

pub(crate) static BOARDS: &[Board] = &[
    Board {
        key: "notice",
        page_title: "공지사항",
        board_title: "새움학원 공지사항",
        posts: &[
            Post {
                idx: 12736,
                title: "새움3관학원 교습비등 게시표",
                date: "2025-07-11",
                content_image: Some(FEE_TABLE_IMAGE),
            },
            Post {
                idx: 7630,
                title: "새움6관학원 교습비등 게시표",
                date: "2025-07-10",
                content_image: Some(FEE_TABLE_IMAGE),
            },
        ],
    },
    Board {
        key: "recruit",
        page_title: "인재채용",
        board_title: "새움학원 인재채용",
        posts: &[
            Post {
                idx: 101,
                title: "[강사채용] 국어과 정규 강사 모집",
                date: "2025-07-05",
                content_image: Some(FEE_TABLE_IMAGE),
            },
            Post {
                idx: 102,
                title: "[직원채용] 상담 데스크 및 행정 직원 모집",
                date: "2025-07-04",
                content_image: Some(FEE_TABLE_IMAGE),
            },
        ],
    },
];

pub(crate) static SCHEDULES: &[GradeSchedule] = &[
    GradeSchedule {
        key: "g1",
        page_title: "고1 프로그램 시간표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "bridge",
                name: "(여름방학전) 브릿지 특강",
            },
            CategoryFilter {
                filter: "sparta",
                name: "스파르타 수학",
            },
            CategoryFilter {
                filter: "summer-math",
                name: "여름방학 고1 수학",
            },
        ],
        items: &[
            ScheduleItem {
                category: "bridge",
                title: "(여름방학전) 고1 브릿지 단기특강",
                image: TIMETABLE_IMAGE,
                grade: &["g1"],
                keywords: &["브릿지", "단기특강", "여름방학", "고1"],
            },
            ScheduleItem {
                category: "sparta",
                title: "스파르타 수학",
                image: TIMETABLE_IMAGE,
                grade: &["g1"],
                keywords: &["스파르타", "수학", "고1"],
            },
            ScheduleItem {
                category: "summer-math",
                title: "여름방학 고1 수학",
                image: TIMETABLE_IMAGE,
                grade: &["g1"],
                keywords: &["여름방학", "수학", "고1"],
            },
        ],
    },
    GradeSchedule {
        key: "g2",
        page_title: "고2 프로그램 시간표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "math-1",
                name: "수학1",
            },
            CategoryFilter {
                filter: "math-2",
                name: "수학2",
            },
        ],
        items: &[
            ScheduleItem {
                category: "math-1",
                title: "[고2] 수학1 실력반",
                image: TIMETABLE_IMAGE,
                grade: &["g2"],
                keywords: &["수학1", "실력반", "고2"],
            },
            ScheduleItem {
                category: "math-2",
                title: "[고2] 수학2 심화반",
                image: TIMETABLE_IMAGE,
                grade: &["g2"],
                keywords: &["수학2", "심화반", "고2"],
            },
        ],
    },
    GradeSchedule {
        key: "g3",
        page_title: "고3 프로그램 시간표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "suneung",
                name: "수능대비",
            },
            CategoryFilter {
                filter: "special",
                name: "특별반",
            },
        ],
        items: &[
            ScheduleItem {
                category: "suneung",
                title: "[고3] 수능 국어 파이널",
                image: TIMETABLE_IMAGE,
                grade: &["g3"],
                keywords: &["수능", "국어", "파이널", "고3"],
            },
            ScheduleItem {
                category: "special",
                title: "[고3] 의대 면접 특강",
                image: TIMETABLE_IMAGE,
                grade: &["g3"],
                keywords: &["의대", "면접", "특강", "고3"],
            },
        ],
    },
    GradeSchedule {
        key: "m3",
        page_title: "중3 프로그램 시간표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "middle-math",
                name: "중등 수학",
            },
            CategoryFilter {
                filter: "middle-sci",
                name: "중등 과학",
            },
        ],
        items: &[
            ScheduleItem {
                category: "middle-math",
                title: "[중3] 최상위 수학반",
                image: TIMETABLE_IMAGE,
                grade: &["m3"],
                keywords: &["수학", "최상위", "중3"],
            },
            ScheduleItem {
                category: "middle-sci",
                title: "[중3] 영재고 대비 과학",
                image: TIMETABLE_IMAGE,
                grade: &["m3"],
                keywords: &["과학", "영재고", "중3"],
            },
        ],
    },
];

pub(crate) static SEMINARS: &[GradeSeminar] = &[
    GradeSeminar {
        key: "g1",
        page_title: "고1 설명회 일정표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "summer",
                name: "여름방학 학습전략",
            },
            CategoryFilter {
                filter: "special",
                name: "특별 설명회",
            },
        ],
        items: &[
            SeminarItem {
                category: "summer",
                title: "25년 고1 여름방학 학습전략 & 입시설명회",
                description: None,
                date: "2/28(금)",
                time: "7시",
                location: Some("본관 1층 대강의실"),
                image: Some("http://googleusercontent.com/file_content/0"),
                grade: &["g1"],
                keywords: &["여름방학", "학습전략", "입시", "고1"],
                status: SeminarStatus::Scheduled,
            },
            SeminarItem {
                category: "special",
                title: "이현우샘 단대부고 간담회",
                description: None,
                date: "2/28(금)",
                time: "7시",
                location: None,
                image: None,
                grade: &["g1"],
                keywords: &["간담회", "이현우", "단대부고", "고1"],
                status: SeminarStatus::Scheduled,
            },
            SeminarItem {
                category: "summer",
                title: "고1 윈터스쿨 설명회",
                description: None,
                date: "미정",
                time: "미정",
                location: None,
                image: None,
                grade: &["g1"],
                keywords: &["윈터스쿨", "여름방학", "고1"],
                status: SeminarStatus::Scheduled,
            },
        ],
    },
    GradeSeminar {
        key: "g2",
        page_title: "고2 설명회 일정표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "midterm",
                name: "중간고사 대비",
            },
            CategoryFilter {
                filter: "final",
                name: "기말고사 대비",
            },
        ],
        items: &[
            SeminarItem {
                category: "midterm",
                title: "25년 고2 중간고사 대비 설명회",
                description: None,
                date: "3/15(토)",
                time: "2시",
                location: None,
                image: None,
                grade: &["g2"],
                keywords: &["중간고사", "고2"],
                status: SeminarStatus::Scheduled,
            },
            SeminarItem {
                category: "final",
                title: "고2 여름방학 특강 설명회",
                description: None,
                date: "7/10(수)",
                time: "4시",
                location: None,
                image: None,
                grade: &["g2"],
                keywords: &["여름방학", "특강", "고2"],
                status: SeminarStatus::Scheduled,
            },
        ],
    },
    GradeSeminar {
        key: "g3",
        page_title: "고3 설명회 일정표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "suneung",
                name: "수능대비",
            },
            CategoryFilter {
                filter: "essay",
                name: "논술",
            },
        ],
        items: &[
            SeminarItem {
                category: "suneung",
                title: "25년 고3 수능 전략 설명회",
                description: None,
                date: "4/1(월)",
                time: "10시",
                location: None,
                image: None,
                grade: &["g3"],
                keywords: &["수능", "전략", "고3"],
                status: SeminarStatus::Scheduled,
            },
            SeminarItem {
                category: "essay",
                title: "고3 논술 파이널 설명회",
                description: None,
                date: "9/1(일)",
                time: "3시",
                location: None,
                image: None,
                grade: &["g3"],
                keywords: &["논술", "파이널", "고3"],
                status: SeminarStatus::Scheduled,
            },
        ],
    },
    GradeSeminar {
        key: "m3",
        page_title: "중3 설명회 일정표",
        categories: &[
            CategoryFilter::all(),
            CategoryFilter {
                filter: "high-prep",
                name: "고등 선행",
            },
        ],
        items: &[SeminarItem {
            category: "high-prep",
            title: "25년 중3 고등 선행 학습 설명회",
            description: None,
            date: "1/20(월)",
            time: "6시",
            location: None,
            image: None,
            grade: &["m3"],
            keywords: &["고등선행", "중3"],
            status: SeminarStatus::Scheduled,
        }],
    },
];

pub(crate) static TEACHERS: &[TeacherItem] = &[
    TeacherItem {
        id: "kang-jeong-hwa",
        name: "강정화",
        subject: "국어",
        image: PORTRAIT_IMAGE,
        category: "kor",
        career: &[
            "서울대학교 국어교육과 졸업",
            "前) 메가스터디",
            "現) 새움학원 국어과 대표 강사",
        ],
        lectures: &["새움학원 대치 본원", "새움학원 분당 캠퍼스"],
        video_id: Some(INTRO_VIDEO),
        timetable_image: Some(TIMETABLE_IMAGE),
    },
    TeacherItem {
        id: "lee-hyun-woo",
        name: "이현우",
        subject: "영어",
        image: PORTRAIT_IMAGE,
        category: "eng",
        career: &[
            "연세대학교 영어영문학과 졸업",
            "前) EBSi",
            "現) 새움학원 영어과 대표 강사",
        ],
        lectures: &["새움학원 대치 본원"],
        video_id: Some(INTRO_VIDEO),
        timetable_image: Some(TIMETABLE_IMAGE),
    },
    TeacherItem {
        id: "yoo-joo-oh",
        name: "유주오",
        subject: "수학",
        image: PORTRAIT_IMAGE,
        category: "math",
        career: &["카이스트 수리과학과 졸업", "現) 새움학원 수학과 대표 강사"],
        lectures: &["새움학원 대치 본원"],
        video_id: Some(INTRO_VIDEO),
        timetable_image: Some(TIMETABLE_IMAGE),
    },
    TeacherItem {
        id: "kim-min-jeong",
        name: "김민정",
        subject: "국어",
        image: PORTRAIT_IMAGE,
        category: "kor",
        career: &["고려대학교 국문학과 졸업", "現) 새움학원 국어과 강사"],
        lectures: &["새움학원 대치 본원"],
        video_id: Some(INTRO_VIDEO),
        timetable_image: Some(TIMETABLE_IMAGE),
    },
];

pub(crate) static LOCATIONS: &[Location] = &[
    Location {
        key: "bonwon",
        name: "새움 본관",
        address: "서울특별시 강남구 도곡로 503",
        map_url: MAP_EMBED,
    },
    Location {
        key: "3gwan",
        name: "새움 3관",
        address: "서울특별시 강남구 대치동 988-18",
        map_url: MAP_EMBED,
    },
    Location {
        key: "6gwan",
        name: "새움 6관",
        address: "서울특별시 강남구 대치동 000-00",
        map_url: MAP_EMBED,
    },
];
