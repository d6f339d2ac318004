pub mod cached_face_detector;
