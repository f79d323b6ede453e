use room_finder::{
    Course, DocumentBuilder, QueryError, ScheduleDocument, TimeOfDay, Weekday, availability,
    next_class, occupying_class, parse_query, room_week,
};

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn course(code: &str, room: &str, days: Vec<Weekday>, start: &str, end: &str) -> Course {
    Course {
        course: code.into(),
        title: format!("{code} Title"),
        section: "A1".into(),
        crn: "1".into(),
        days,
        start_time: t(start),
        end_time: t(end),
        location: room.into(),
        instructor: "Staff".into(),
    }
}

fn campus_doc() -> ScheduleDocument {
    let mut builder = DocumentBuilder::new();
    // Insertion order is deliberately not alphabetical.
    builder.add_course(course("CS101", "Smith 201", vec![Weekday::Monday], "09:00", "10:15"));
    builder.add_course(course("CS210", "Adams 100", vec![Weekday::Monday], "09:30", "10:45"));
    builder.add_course(course("MATH201", "Zimmer 9", vec![Weekday::Monday], "13:00", "14:15"));
    builder.add_course(course("BIO110", "Mason 12", vec![Weekday::Tuesday], "09:00", "10:15"));
    builder.finish()
}

#[test]
fn occupancy_is_half_open() {
    let doc = campus_doc();
    let slots = doc.slots("Smith 201").unwrap();
    assert!(occupying_class(slots, Weekday::Monday, t("09:00")).is_some());
    assert!(occupying_class(slots, Weekday::Monday, t("10:14")).is_some());
    assert!(occupying_class(slots, Weekday::Monday, t("10:15")).is_none());
    assert!(occupying_class(slots, Weekday::Monday, t("08:59")).is_none());
    assert!(occupying_class(slots, Weekday::Tuesday, t("09:30")).is_none());
}

#[test]
fn overlapping_slots_first_match_in_stored_order_wins() {
    let mut builder = DocumentBuilder::new();
    builder.add_course(course("CS101", "Smith 201", vec![Weekday::Monday], "09:00", "10:15"));
    builder.add_course(course("CS999", "Smith 201", vec![Weekday::Monday], "09:00", "11:00"));
    let doc = builder.finish();

    let slot = occupying_class(doc.slots("Smith 201").unwrap(), Weekday::Monday, t("09:30")).unwrap();
    assert_eq!(slot.course, "CS101 - CS101 Title");
}

#[test]
fn next_class_picks_smallest_later_start() {
    let mut builder = DocumentBuilder::new();
    builder.add_course(course("LATE", "Smith 201", vec![Weekday::Monday], "15:00", "16:00"));
    builder.add_course(course("SOON", "Smith 201", vec![Weekday::Monday], "11:00", "12:00"));
    let doc = builder.finish();
    let slots = doc.slots("Smith 201").unwrap();

    let next = next_class(slots, Weekday::Monday, t("10:00")).unwrap();
    assert_eq!(next.start_time, t("11:00"));

    // A class currently in session is not "next".
    let next = next_class(slots, Weekday::Monday, t("11:30")).unwrap();
    assert_eq!(next.start_time, t("15:00"));

    assert!(next_class(slots, Weekday::Monday, t("16:00")).is_none());
    assert!(next_class(slots, Weekday::Tuesday, t("08:00")).is_none());
}

#[test]
fn next_class_tie_goes_to_first_encountered() {
    let mut builder = DocumentBuilder::new();
    builder.add_course(course("FIRST", "Smith 201", vec![Weekday::Monday], "11:00", "12:00"));
    builder.add_course(course("SECOND", "Smith 201", vec![Weekday::Monday], "11:00", "12:30"));
    let doc = builder.finish();

    let next = next_class(doc.slots("Smith 201").unwrap(), Weekday::Monday, t("10:00")).unwrap();
    assert_eq!(next.course, "FIRST - FIRST Title");
}

#[test]
fn availability_partitions_every_room_exactly_once() {
    let doc = campus_doc();
    let report = availability(&doc, Weekday::Monday, t("09:45"));

    assert_eq!(
        report.summary.available + report.summary.occupied,
        report.summary.total_rooms
    );
    let mut seen: Vec<&str> = report
        .available_rooms
        .iter()
        .map(|r| r.room.as_str())
        .chain(report.occupied_rooms.iter().map(|r| r.room.as_str()))
        .collect();
    seen.sort();
    let expected: Vec<&str> = doc.room_list.iter().map(String::as_str).collect();
    assert_eq!(seen, expected);

    // Smith 201 and Adams 100 are mid-class at 09:45.
    assert_eq!(report.summary.occupied, 2);
    assert_eq!(report.summary.available, 2);
}

#[test]
fn availability_lists_are_sorted_by_room_name() {
    let doc = campus_doc();
    let report = availability(&doc, Weekday::Monday, t("09:45"));

    let occupied: Vec<&str> = report.occupied_rooms.iter().map(|r| r.room.as_str()).collect();
    assert_eq!(occupied, vec!["Adams 100", "Smith 201"]);
    let available: Vec<&str> = report
        .available_rooms
        .iter()
        .map(|r| r.room.as_str())
        .collect();
    assert_eq!(available, vec!["Mason 12", "Zimmer 9"]);
}

#[test]
fn available_rooms_carry_their_next_class() {
    let doc = campus_doc();
    let report = availability(&doc, Weekday::Monday, t("09:45"));

    let zimmer = report
        .available_rooms
        .iter()
        .find(|r| r.room == "Zimmer 9")
        .unwrap();
    assert_eq!(zimmer.next_class.as_ref().unwrap().start_time, t("13:00"));

    // Mason 12 only meets on Tuesday: free for the rest of Monday.
    let mason = report
        .available_rooms
        .iter()
        .find(|r| r.room == "Mason 12")
        .unwrap();
    assert!(mason.next_class.is_none());
}

#[test]
fn smith_201_scenario() {
    let mut builder = DocumentBuilder::new();
    builder.add_course(course("CS101", "Smith 201", vec![Weekday::Monday], "09:00", "10:15"));
    let doc = builder.finish();
    let slots = doc.slots("Smith 201").unwrap();

    let current = occupying_class(slots, Weekday::Monday, t("09:30")).unwrap();
    assert!(current.course.contains("CS101"));

    assert!(occupying_class(slots, Weekday::Monday, t("10:15")).is_none());
    assert!(next_class(slots, Weekday::Monday, t("10:15")).is_none());
}

#[test]
fn week_schedule_has_all_seven_days_sorted() {
    let mut builder = DocumentBuilder::new();
    builder.add_course(course("PM", "Smith 201", vec![Weekday::Monday, Weekday::Wednesday], "13:00", "14:15"));
    builder.add_course(course("AM", "Smith 201", vec![Weekday::Monday], "09:00", "10:15"));
    let doc = builder.finish();

    let week = room_week(&doc, "Smith 201").unwrap();
    assert_eq!(week.monday.len(), 2);
    assert!(week.monday[0].start_time < week.monday[1].start_time);
    assert_eq!(week.wednesday.len(), 1);
    assert!(week.sunday.is_empty());

    let value = serde_json::to_value(&week).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["Friday", "Monday", "Saturday", "Sunday", "Thursday", "Tuesday", "Wednesday"]
    );
}

#[test]
fn unknown_room_is_a_value_not_a_panic() {
    let doc = campus_doc();
    assert_eq!(
        room_week(&doc, "Nowhere 0").unwrap_err(),
        QueryError::RoomNotFound("Nowhere 0".into())
    );
}

#[test]
fn invalid_day_and_time_are_structured_errors() {
    assert_eq!(
        parse_query("Funday", "09:30").unwrap_err(),
        QueryError::InvalidDay("Funday".into())
    );
    assert_eq!(
        parse_query("Monday", "25:99").unwrap_err(),
        QueryError::InvalidTime("25:99".into())
    );
    let (day, time) = parse_query("Monday", "09:30").unwrap();
    assert_eq!(day, Weekday::Monday);
    assert_eq!(time, t("09:30"));
}
