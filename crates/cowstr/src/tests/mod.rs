mod cow;
