mod segment_ball_clip;
