use hueedit::hues::error::HueError;
use hueedit::ids::parse_id_list;

#[test]
fn id_list_parsing() {
	assert_eq!(parse_id_list("1-3,7, 9 - 10", 3000).unwrap(), vec![1, 2, 3, 7, 9, 10]);
	assert_eq!(parse_id_list("4", 5).unwrap(), vec![4]);
	assert_eq!(parse_id_list("5,5", 8).unwrap(), vec![5, 5]);
	assert_eq!(parse_id_list("", 0).unwrap(), Vec::<usize>::new());
	assert_eq!(parse_id_list("2,,3,", 8).unwrap(), vec![2, 3]);
}

#[test]
fn id_list_parsing_invalid() {
	for list in ["5-3", "x", "1-", "-4", "1;2"] {
		let _ = parse_id_list(list, 3000).unwrap_err();
	}
}

#[test]
fn id_list_parsing_out_of_range() {
	let err = parse_id_list("0-200000000", 3000).unwrap_err();
	assert!(matches!(err.downcast_ref::<HueError>(), Some(HueError::OutOfRange { index: 200000000, len: 3000 })));

	let err = parse_id_list("1,8", 8).unwrap_err();
	assert!(matches!(err.downcast_ref::<HueError>(), Some(HueError::OutOfRange { index: 8, len: 8 })));

	assert_eq!(parse_id_list("0-7", 8).unwrap().len(), 8);
}
